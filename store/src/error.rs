use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to connect to session store: {0}")]
    Connection(String),

    #[error("session store backend error: {0}")]
    Backend(String),

    #[error("malformed session record: {0}")]
    Serialization(String),
}
