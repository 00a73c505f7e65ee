use super::*;

#[test]
fn from_response_keeps_json_object_as_rejected() {
    let err = ApiError::from_response(400, r#"{"domain": ["already taken"]}"#);
    let ApiError::Rejected { status, errors } = err else {
        panic!("expected rejected error");
    };
    assert_eq!(status, 400);
    assert_eq!(errors["domain"], serde_json::json!(["already taken"]));
}

#[test]
fn from_response_keeps_plain_text_as_status() {
    let err = ApiError::from_response(502, "Bad Gateway");
    assert_eq!(err, ApiError::Status { status: 502, body: "Bad Gateway".to_owned() });
}

#[test]
fn from_response_treats_json_array_as_status() {
    let err = ApiError::from_response(400, r#"["nope"]"#);
    assert!(matches!(err, ApiError::Status { status: 400, .. }));
}

#[test]
fn session_error_display_is_transparent() {
    let err = SessionError::from(StorageError::Read { key: "username".to_owned() });
    assert_eq!(err.to_string(), "failed to read `username` from storage");
}

#[test]
fn message_text_joins_lists_and_keeps_strings() {
    assert_eq!(message_text(&serde_json::json!("already taken")), "already taken");
    assert_eq!(
        message_text(&serde_json::json!(["too short.", "too common."])),
        "too short. too common."
    );
    assert_eq!(message_text(&serde_json::json!(42)), "42");
}

#[test]
fn field_messages_flattens_rejection_body() {
    let err = ApiError::from_response(400, r#"{"email": ["invalid"], "detail": "bad"}"#);
    assert_eq!(
        err.field_messages(),
        vec![
            ("detail".to_owned(), "bad".to_owned()),
            ("email".to_owned(), "invalid".to_owned()),
        ]
    );
    assert!(ApiError::Unavailable.field_messages().is_empty());
}
