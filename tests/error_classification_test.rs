use candidate_sync::api::types::ApiError;
use candidate_sync::error::Error;

fn api_error(status: u16, message: &str) -> Error {
    Error::Api(ApiError {
        message: message.to_string(),
        status_code: status,
        code: None,
        errors: None,
    })
}

#[test]
fn connectivity_failure_maps_to_connection_message() {
    assert_eq!(
        api_error(0, "socket hang up").user_message(),
        "Unable to connect to the server. Please check your internet connection."
    );
}

#[test]
fn rate_limit_maps_to_wait_message() {
    assert_eq!(
        api_error(429, "slow down").user_message(),
        "Too many requests. Please wait a moment and try again."
    );
}

#[test]
fn server_faults_map_to_server_error_message() {
    assert_eq!(
        api_error(503, "Service Unavailable").user_message(),
        "Server error occurred. Please try again later."
    );
    assert_eq!(
        api_error(500, "boom").user_message(),
        "Server error occurred. Please try again later."
    );
}

#[test]
fn client_fault_surfaces_its_message_verbatim() {
    assert_eq!(api_error(400, "Invalid").user_message(), "Invalid");
    assert_eq!(api_error(404, "Candidate not found").user_message(), "Candidate not found");
}

#[test]
fn client_fault_without_message_falls_back_to_generic() {
    assert_eq!(
        api_error(400, "").user_message(),
        "An unexpected error occurred. Please try again."
    );
}

#[test]
fn non_api_failures_classify_as_unexpected() {
    let err = Error::NotFound("Candidate 7 not found".to_string());
    assert_eq!(
        err.user_message(),
        "An unexpected error occurred. Please try again."
    );
}

#[test]
fn rate_limit_takes_precedence_over_message() {
    // 429 is matched before the verbatim-message fallback.
    assert_eq!(
        api_error(429, "custom body message").user_message(),
        "Too many requests. Please wait a moment and try again."
    );
}
