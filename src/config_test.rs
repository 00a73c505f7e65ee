use super::*;

#[test]
fn new_trims_trailing_slashes() {
    let config = ApiConfig::new("https://api.example.com///");
    assert_eq!(config.base_url(), "https://api.example.com");
}

#[test]
fn new_falls_back_to_default_for_blank_url() {
    assert_eq!(ApiConfig::new("   ").base_url(), DEFAULT_API_URL);
}

#[test]
fn endpoint_joins_absolute_and_relative_paths() {
    let config = ApiConfig::new("http://api.local/");
    assert_eq!(config.endpoint("/users/login/"), "http://api.local/users/login/");
    assert_eq!(config.endpoint("users/login/"), "http://api.local/users/login/");
}

#[test]
fn endpoint_keeps_base_path_prefix() {
    let config = ApiConfig::new("http://host/api");
    assert_eq!(config.endpoint("/users/login/"), "http://host/api/users/login/");
}

#[test]
fn parse_log_level_accepts_known_names() {
    assert_eq!(parse_log_level(Some("debug")), log::Level::Debug);
    assert_eq!(parse_log_level(Some(" WARN ")), log::Level::Warn);
}

#[test]
fn parse_log_level_defaults_on_missing_or_unknown() {
    assert_eq!(parse_log_level(None), DEFAULT_LOG_LEVEL);
    assert_eq!(parse_log_level(Some("loud")), DEFAULT_LOG_LEVEL);
}
