use super::*;
use crate::error::{ApiError, StorageError};

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  alice ", "pw"),
        Ok(("alice".to_owned(), "pw".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("alice", " pw "),
        Ok(("alice".to_owned(), " pw ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter both username and password."));
    assert_eq!(validate_login_input("alice", ""), Err("Enter both username and password."));
}

#[test]
fn login_failure_message_uses_server_text() {
    let err = SessionError::Api(ApiError::from_response(
        401,
        r#"{"error": "Company is not verified or not known"}"#,
    ));
    assert_eq!(login_failure_message(&err), "Login failed: Company is not verified or not known");
}

#[test]
fn login_failure_message_falls_back_to_display() {
    let err = SessionError::Api(ApiError::Status { status: 500, body: String::new() });
    assert_eq!(login_failure_message(&err), "Login failed: request failed with status 500");
    let err = SessionError::Storage(StorageError::Unavailable);
    assert_eq!(login_failure_message(&err), "Login failed: persistent storage is not available");
}

#[test]
fn login_failure_message_reports_busy() {
    assert_eq!(
        login_failure_message(&SessionError::Busy),
        "Login failed: another request is in progress"
    );
}
