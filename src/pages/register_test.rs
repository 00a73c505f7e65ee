use super::*;
use serde_json::json;

fn rejected(body: serde_json::Value) -> SessionError {
    SessionError::Api(ApiError::from_response(400, &body.to_string()))
}

// =============================================================
// RegistrationErrors
// =============================================================

#[test]
fn field_error_is_attributed_to_its_field() {
    let errors = RegistrationErrors::from_error(&rejected(json!({ "domain": "already taken" })));
    assert_eq!(errors.field("domain"), Some("already taken"));
    assert_eq!(errors.general(), None);
}

#[test]
fn unknown_key_becomes_general_error() {
    let errors = RegistrationErrors::from_error(&rejected(json!({ "detail": "rate limited" })));
    assert_eq!(errors.general().as_deref(), Some("rate limited"));
    assert!(REGISTER_FIELDS.iter().all(|field| errors.field(field).is_none()));
}

#[test]
fn list_values_and_mixed_keys_are_split() {
    let errors = RegistrationErrors::from_error(&rejected(json!({
        "email": ["Enter a valid email address."],
        "password": ["Too short.", "Too common."],
        "error": "Company is not verified",
        "non_field_errors": ["Try again later."],
    })));
    assert_eq!(errors.field("email"), Some("Enter a valid email address."));
    assert_eq!(errors.field("password"), Some("Too short. Too common."));
    assert_eq!(
        errors.general().as_deref(),
        Some("Company is not verified Try again later.")
    );
}

#[test]
fn non_rejection_failure_is_general() {
    let errors = RegistrationErrors::from_error(&SessionError::Api(ApiError::Network(
        "connection refused".to_owned(),
    )));
    assert_eq!(errors.general().as_deref(), Some("network error: connection refused"));
    assert!(REGISTER_FIELDS.iter().all(|name| errors.field(name).is_none()));
}

#[test]
fn default_errors_are_empty() {
    let errors = RegistrationErrors::default();
    assert_eq!(errors.general(), None);
    assert!(REGISTER_FIELDS.iter().all(|name| errors.field(name).is_none()));
}

// =============================================================
// build_registration
// =============================================================

#[test]
fn build_registration_trims_everything_but_password() {
    let body = build_registration(" admin ", " pw ", " a@acme.test ", " Acme ", " acme.test ");
    assert_eq!(body.username, "admin");
    assert_eq!(body.password, " pw ");
    assert_eq!(body.email, "a@acme.test");
    assert_eq!(body.name, "Acme");
    assert_eq!(body.domain, "acme.test");
}
