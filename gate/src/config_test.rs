use super::*;

fn lookup_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_owned())
    }
}

// =============================================================================
// from_lookup
// =============================================================================

#[test]
fn from_lookup_defaults_when_unset() {
    let config = GateConfig::from_lookup(|_| None).expect("config");
    assert_eq!(config, GateConfig::default());
    assert_eq!(config.landing_path, "/transactions");
    assert_eq!(config.login_path, "/login");
}

#[test]
fn from_lookup_reads_both_paths() {
    let config = GateConfig::from_lookup(lookup_from(&[
        ("FORMDESK_LANDING_PATH", "/inputform"),
        ("FORMDESK_LOGIN_PATH", "/signin"),
    ]))
    .expect("config");
    assert_eq!(config.landing_path, "/inputform");
    assert_eq!(config.login_path, "/signin");
}

#[test]
fn from_lookup_blank_value_falls_back_to_default() {
    let config = GateConfig::from_lookup(lookup_from(&[("FORMDESK_LANDING_PATH", "   ")])).expect("config");
    assert_eq!(config.landing_path, DEFAULT_LANDING_PATH);
}

#[test]
fn from_lookup_trims_values() {
    let config = GateConfig::from_lookup(lookup_from(&[("FORMDESK_LOGIN_PATH", " /signin ")])).expect("config");
    assert_eq!(config.login_path, "/signin");
}

#[test]
fn from_lookup_rejects_relative_path() {
    let err = GateConfig::from_lookup(lookup_from(&[("FORMDESK_LANDING_PATH", "transactions")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::NotAbsolute { field: "landing_path", value: "transactions".to_owned() }
    );
}

#[test]
fn from_lookup_rejects_same_login_and_landing() {
    let err = GateConfig::from_lookup(lookup_from(&[("FORMDESK_LANDING_PATH", "/login")])).unwrap_err();
    assert_eq!(err, ConfigError::SamePath("/login".to_owned()));
}

// =============================================================================
// serde
// =============================================================================

#[test]
fn deserializes_camel_case_with_defaults() {
    let config: GateConfig = serde_json::from_str(r#"{"landingPath":"/calendar"}"#).expect("json");
    assert_eq!(config.landing_path, "/calendar");
    assert_eq!(config.login_path, DEFAULT_LOGIN_PATH);
}

#[test]
fn error_messages_name_the_problem() {
    let err = ConfigError::NotAbsolute { field: "login_path", value: "x".to_owned() };
    assert_eq!(err.to_string(), "login_path must be an absolute path, got \"x\"");
}
