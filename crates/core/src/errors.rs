use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShareError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Operation already in progress: {0}")]
    Busy(String),

    #[error("Geocoding error: {0}")]
    Geocoding(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ShareError {
    /// The bare message without the variant prefix, as shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            ShareError::NotFound(msg)
            | ShareError::Validation(msg)
            | ShareError::Busy(msg)
            | ShareError::Geocoding(msg) => msg.clone(),
            ShareError::Database(report) => report.to_string(),
            ShareError::Internal(err) => err.to_string(),
        }
    }
}

pub type ShareResult<T> = Result<T, ShareError>;
