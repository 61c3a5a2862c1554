#![cfg(feature = "config")]

use datintrval::{ConfigError, DateInterval, FixedClock, RenderConfig};

#[test]
fn configured_policy_renders_localized() {
    let config = RenderConfig::from_toml_str(
        r#"
        placeholder = "…"
        locale = "en_US"
        default_pattern = "%Y-%m-%d"

        [patterns]
        en_US = "%m/%d/%Y"
        de_DE = "%d.%m.%Y"
        "#,
    )
    .unwrap();

    let policy = config.policy(FixedClock::new("2024-06-01 00:00:00"));
    assert_eq!(policy.locale(), Some("en_US"));
    assert_eq!(policy.placeholder(), "…");

    let interval = DateInterval::between("2024-01-02", "2024-12-31").unwrap();
    assert_eq!(
        policy.to_interval_string_default(&interval),
        "[01/02/2024; 12/31/2024]"
    );

    let interval = DateInterval::until("2024-12-31");
    assert_eq!(policy.to_interval_string_default(&interval), "[…; 12/31/2024]");
}

#[test]
fn default_config_keeps_canonical_dates() {
    let policy = RenderConfig::default().policy(FixedClock::new("2024-06-01 00:00:00"));
    let interval = DateInterval::since("2024-01-02");
    assert_eq!(policy.to_interval_string_default(&interval), "[2024-01-02; ?]");
}

#[test]
fn malformed_toml() {
    let err = RenderConfig::from_toml_str("placeholder = ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn broken_default_pattern() {
    let err = RenderConfig::from_toml_str("default_pattern = \"%Y-%Q\"").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPattern { .. }));
}
