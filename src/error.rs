use crate::api::types::ApiError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

impl Error {
    /// Maps a failure to the message shown on the page-level error screen.
    /// First match wins; only transport failures carry a status code.
    pub fn user_message(&self) -> String {
        match self {
            Error::Api(err) => match err.status_code {
                0 => "Unable to connect to the server. Please check your internet connection."
                    .to_string(),
                429 => "Too many requests. Please wait a moment and try again.".to_string(),
                code if code >= 500 => "Server error occurred. Please try again later.".to_string(),
                _ if !err.message.is_empty() => err.message.clone(),
                _ => "An unexpected error occurred. Please try again.".to_string(),
            },
            _ => "An unexpected error occurred. Please try again.".to_string(),
        }
    }
}
