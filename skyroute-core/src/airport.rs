use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::repository::AirportRepository;
use crate::CoreResult;

#[derive(Debug, Deserialize)]
pub struct AutocompleteRequest {
    pub prefix: String,
}

/// Airport as returned to clients: the store identifier exposed as a string
/// `id`, every other stored field passed through untouched.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Airport {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Airport {
    /// Relabels `_id` to `id`. Any stored `id` field is replaced.
    pub fn from_document(mut doc: Map<String, Value>) -> Self {
        let id = doc
            .remove("_id")
            .map(|v| identifier_to_string(&v))
            .unwrap_or_default();
        doc.remove("id");

        Self { id, fields: doc }
    }
}

/// Renders a store identifier (already in relaxed extended JSON) as text.
/// ObjectIds arrive as `{"$oid": "<hex>"}`.
pub fn identifier_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        Value::Object(obj) => match obj.get("$oid").and_then(Value::as_str) {
            Some(hex) => hex.to_string(),
            None => value.to_string(),
        },
        other => other.to_string(),
    }
}

/// Searches airports and relabels identifiers, keeping the backend's
/// relevance order.
pub async fn autocomplete(repo: &dyn AirportRepository, prefix: &str) -> CoreResult<Vec<Airport>> {
    let docs = repo.autocomplete(prefix).await?;
    Ok(docs.into_iter().map(Airport::from_document).collect())
}
