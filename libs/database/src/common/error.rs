/// Unified error type for document store operations
///
/// Callers only need to tell [`StoreError::NotFound`] apart from everything else;
/// the remaining variants keep the backend's message for logs and 500 bodies.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No document with the given id exists in the collection
    #[error("the requested item could not be found")]
    NotFound { collection: &'static str, id: String },

    /// MongoDB driver or server error
    #[cfg(feature = "mongodb")]
    #[error("MongoDB error: {0}")]
    Mongo(mongodb::error::Error),

    /// Converting a document to BSON failed
    #[cfg(feature = "mongodb")]
    #[error("BSON serialization error: {0}")]
    Bson(#[from] mongodb::bson::ser::Error),

    /// Converting a document to or from its stored form failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend accepted the request but reported a failed write
    #[error("Write failed: {0}")]
    Write(String),

    /// Connection could not be established
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Shared state of an in-process store became unusable
    #[error("Store lock poisoned: {0}")]
    Lock(String),
}

impl StoreError {
    pub fn not_found(collection: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            collection,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(feature = "mongodb")]
impl From<mongodb::error::Error> for StoreError {
    /// Server-reported write failures are classified as [`StoreError::Write`];
    /// everything else (network, selection timeouts, decode) stays a driver error.
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::ErrorKind;

        if matches!(*err.kind, ErrorKind::Write(_)) {
            Self::Write(err.to_string())
        } else {
            Self::Mongo(err)
        }
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
