use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Wire shape of a failed request after normalization. `status_code == 0`
/// is reserved for network-level failures that produced no response.
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{message} (status {status_code})")]
pub struct ApiError {
    pub message: String,
    #[serde(default)]
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

impl ApiError {
    pub fn network(err: &reqwest::Error) -> Self {
        let message = if err.is_connect() || err.is_timeout() {
            "Unable to connect to the server. Please check your internet connection.".to_string()
        } else {
            err.to_string()
        };
        Self {
            message,
            status_code: 0,
            code: Some("NETWORK_ERROR".to_string()),
            errors: None,
        }
    }

    pub(crate) fn from_response(status: u16, body: ErrorBody) -> Self {
        Self {
            message: body
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "An unexpected error occurred".to_string()),
            status_code: status,
            code: body.code.or_else(|| Some(format!("HTTP_{}", status))),
            errors: body.errors,
        }
    }
}

/// Error body the backend sends alongside non-2xx statuses. Every field is
/// optional; responses with unparseable bodies fall back to the defaults.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
    pub code: Option<String>,
    pub errors: Option<HashMap<String, Vec<String>>>,
}
