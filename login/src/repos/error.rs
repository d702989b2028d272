use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("user store io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("user store is corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),
}
