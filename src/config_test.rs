use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.client.content_base_url, "");
    assert_eq!(cfg.client.typing_delay_ms, DEFAULT_TYPING_DELAY_MS);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = AppConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("CONTENT_API_BASE_URL", "https://content.example.com/"),
        ("ASSISTANT_TYPING_DELAY_MS", "250"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.client.content_base_url, "https://content.example.com");
    assert_eq!(cfg.client.typing_delay_ms, 250);
}

#[test]
fn from_lookup_blank_values_use_defaults() {
    let cfg = AppConfig::from_lookup(lookup(&[("PORT", "  "), ("CONTENT_API_BASE_URL", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.client.content_base_url, "");
}

#[test]
fn from_lookup_rejects_invalid_port() {
    let err = AppConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value } if value == "http"));

    let err = AppConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { .. }));
}

#[test]
fn from_lookup_rejects_invalid_base_url() {
    let err = AppConfig::from_lookup(lookup(&[("CONTENT_API_BASE_URL", "content.example.com")])).unwrap_err();
    assert!(matches!(err, ConfigError::Client(_)));
}

#[test]
fn from_lookup_clamps_typing_delay() {
    let cfg = AppConfig::from_lookup(lookup(&[("ASSISTANT_TYPING_DELAY_MS", "999999")])).unwrap();
    assert_eq!(cfg.client.typing_delay_ms, MAX_TYPING_DELAY_MS);
}

#[test]
fn from_lookup_rejects_negative_typing_delay() {
    let err = AppConfig::from_lookup(lookup(&[("ASSISTANT_TYPING_DELAY_MS", "-5")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTypingDelay { .. }));
}
