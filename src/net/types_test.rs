use super::*;

#[test]
fn login_request_serializes_username_and_password() {
    let body = LoginRequest { username: "alice".to_owned(), password: "pw".to_owned() };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "username": "alice", "password": "pw" })
    );
}

#[test]
fn token_pair_ignores_extra_fields() {
    let pair: TokenPair =
        serde_json::from_str(r#"{"access": "a1", "refresh": "r1", "lifetime": 300}"#).unwrap();
    assert_eq!(pair, TokenPair { access: "a1".to_owned(), refresh: "r1".to_owned() });
}

#[test]
fn token_pair_requires_refresh() {
    assert!(serde_json::from_str::<TokenPair>(r#"{"access": "a1"}"#).is_err());
}

#[test]
fn company_registration_uses_name_for_company() {
    let body = CompanyRegistration {
        username: "admin".to_owned(),
        password: "secret".to_owned(),
        email: "admin@acme.test".to_owned(),
        name: "Acme".to_owned(),
        domain: "acme.test".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({
            "username": "admin",
            "password": "secret",
            "email": "admin@acme.test",
            "name": "Acme",
            "domain": "acme.test",
        })
    );
}

#[test]
fn refreshed_token_refresh_is_optional() {
    let token: RefreshedToken = serde_json::from_str(r#"{"access": "a2"}"#).unwrap();
    assert_eq!(token.access, "a2");
    assert!(token.refresh.is_none());
}
