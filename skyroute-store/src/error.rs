use mongodb::error::{Error, ErrorKind};
use skyroute_core::StoreError;

/// Maps a driver error onto the store error taxonomy.
pub fn translate(err: Error) -> StoreError {
    match *err.kind {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::ConnectionPoolCleared { .. }
        | ErrorKind::DnsResolve { .. } => {
            tracing::error!("MongoDB unreachable: {}", err);
            StoreError::Unavailable(err.to_string())
        }
        ErrorKind::BsonDeserialization(ref e) => StoreError::Decode(e.to_string()),
        _ => {
            tracing::error!("MongoDB query failed: {}", err);
            StoreError::Query(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_are_unavailable() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = translate(Error::from(io));
        assert!(matches!(err, StoreError::Unavailable(_)));
    }
}
