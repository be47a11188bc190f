use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::repository::ItineraryRepository;
use crate::CoreResult;

/// Output groups produced by the itinerary projection.
pub const FLYING_FROM: &str = "flying_from";
pub const FLYING_TO: &str = "flying_to";
pub const AIRLINE: &str = "airline";

/// Fields projected from each joined airport, in output order.
pub const AIRPORT_FIELDS: [&str; 5] = ["name", "code", "country", "state", "city"];
/// Fields projected from the joined airline, in output order.
pub const AIRLINE_FIELDS: [&str; 5] = ["callsign", "name", "country", "phone", "url"];

#[derive(Debug, Deserialize)]
pub struct ItineraryRequest {
    pub route_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct AirportSummary {
    pub name: String,
    pub code: String,
    pub country: String,
    pub state: String,
    pub city: String,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct AirlineSummary {
    pub callsign: String,
    pub name: String,
    pub country: String,
    pub phone: String,
    pub url: String,
}

/// A route joined with both airports and its airline. Every field is
/// always present; anything the join did not resolve is `""`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DetailedItinerary {
    pub flying_from: AirportSummary,
    pub flying_to: AirportSummary,
    pub airline: AirlineSummary,
}

impl DetailedItinerary {
    pub fn from_projection(row: &Value) -> Self {
        Self {
            flying_from: AirportSummary::from_group(row.get(FLYING_FROM)),
            flying_to: AirportSummary::from_group(row.get(FLYING_TO)),
            airline: AirlineSummary::from_group(row.get(AIRLINE)),
        }
    }
}

impl AirportSummary {
    fn from_group(group: Option<&Value>) -> Self {
        Self {
            name: text_at(group, "name"),
            code: text_at(group, "code"),
            country: text_at(group, "country"),
            state: text_at(group, "state"),
            city: text_at(group, "city"),
        }
    }
}

impl AirlineSummary {
    fn from_group(group: Option<&Value>) -> Self {
        Self {
            callsign: text_at(group, "callsign"),
            name: text_at(group, "name"),
            country: text_at(group, "country"),
            phone: text_at(group, "phone"),
            url: text_at(group, "url"),
        }
    }
}

/// Missing groups, missing keys and nulls all collapse to `""`.
fn text_at(group: Option<&Value>, key: &str) -> String {
    match group.and_then(|g| g.get(key)) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

pub async fn lookup_itinerary(
    repo: &dyn ItineraryRepository,
    route_id: i64,
) -> CoreResult<Vec<DetailedItinerary>> {
    let rows = repo.detailed_itinerary(route_id).await?;
    Ok(rows.iter().map(DetailedItinerary::from_projection).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fully_joined_row() {
        let row = json!({
            "_id": {"$oid": "65a1f0c2e4b0a1b2c3d4e5f6"},
            "flying_from": {"name": "John F Kennedy", "code": "JFK", "country": "US", "state": "NY", "city": "New York"},
            "flying_to": {"name": "Los Angeles Intl", "code": "LAX", "country": "US", "state": "CA", "city": "Los Angeles"},
            "airline": {"callsign": "AMERICAN", "name": "American Airlines", "country": "US", "phone": "+1 800", "url": "aa.com"}
        });

        let itinerary = DetailedItinerary::from_projection(&row);
        assert_eq!(itinerary.flying_from.code, "JFK");
        assert_eq!(itinerary.flying_to.city, "Los Angeles");
        assert_eq!(itinerary.airline.callsign, "AMERICAN");
    }

    #[test]
    fn test_unmatched_origin_is_defaulted_not_omitted() {
        // $project drops a group whose source relation resolved to nothing
        let row = json!({
            "flying_to": {"code": "LAX"},
            "airline": {}
        });

        let out = serde_json::to_value(DetailedItinerary::from_projection(&row)).unwrap();
        assert_eq!(
            out["flying_from"],
            json!({"name": "", "code": "", "country": "", "state": "", "city": ""})
        );
        assert_eq!(out["flying_to"]["code"], "LAX");
        assert_eq!(out["flying_to"]["state"], "");
        assert_eq!(out["airline"]["url"], "");
    }

    #[test]
    fn test_null_and_numeric_values() {
        let row = json!({"airline": {"name": null, "phone": 5551234}});
        let itinerary = DetailedItinerary::from_projection(&row);
        assert_eq!(itinerary.airline.name, "");
        assert_eq!(itinerary.airline.phone, "5551234");
    }

    #[test]
    fn test_field_lists_match_output_shape() {
        let out = serde_json::to_value(DetailedItinerary::default()).unwrap();
        for field in AIRPORT_FIELDS {
            assert!(out[FLYING_FROM].get(field).is_some());
            assert!(out[FLYING_TO].get(field).is_some());
        }
        for field in AIRLINE_FIELDS {
            assert!(out[AIRLINE].get(field).is_some());
        }
    }
}
