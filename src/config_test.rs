use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let config = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.api.base_url(), DEFAULT_API_BASE_URL);
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_parses_overrides() {
    let config =
        HostConfig::from_lookup(lookup(&[("PORT", " 8080 "), ("API_BASE_URL", "https://img.example.com/api/")]))
            .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.api.base_url(), "https://img.example.com/api");
    assert_eq!(config.api.image_url("a.png"), "https://img.example.com/uploads/a.png");
}

#[test]
fn from_lookup_blank_port_falls_back_to_default() {
    let config = HostConfig::from_lookup(lookup(&[("PORT", "  ")])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn from_lookup_invalid_port_errors() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, HostError::Config { var: "PORT", .. }));
}

#[test]
fn from_lookup_blank_base_url_uses_default() {
    let config = HostConfig::from_lookup(lookup(&[("API_BASE_URL", "")])).unwrap();
    assert_eq!(config.api.base_url(), DEFAULT_API_BASE_URL);
}
