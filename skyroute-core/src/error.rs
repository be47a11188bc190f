/// Failure talking to the backing document store.
///
/// Repositories translate their driver errors into one of these kinds so the
/// HTTP layer can tell an unreachable store apart from a bad query.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Connectivity, server selection or timeout failures.
    #[error("data store unavailable: {0}")]
    Unavailable(String),
    /// A stored document could not be decoded into the expected shape.
    #[error("{0}")]
    Decode(String),
    /// The store rejected or failed the query.
    #[error("query failed: {0}")]
    Query(String),
}
