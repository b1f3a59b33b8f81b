use crisp_api::application::config::MASKED_SECRET;
use crisp_api::constants::{DEFAULT_REST_BASE_URL, DEFAULT_REST_TIMEOUT};
use crisp_api::prelude::*;

#[test]
fn test_with_credentials_uses_default_rest_settings() {
    let config = Config::with_credentials("identifier", "key", Tier::User);
    assert_eq!(config.credentials.identifier, "identifier");
    assert_eq!(config.credentials.key, "key");
    assert_eq!(config.tier, Tier::User);
    assert_eq!(config.rest_api.base_url, DEFAULT_REST_BASE_URL);
    assert_eq!(config.rest_api.timeout, DEFAULT_REST_TIMEOUT);
}

#[test]
fn test_with_base_url_strips_trailing_slash() {
    let config =
        Config::with_credentials("id", "key", Tier::Plugin).with_base_url("http://127.0.0.1:8080/");
    assert_eq!(config.rest_api.base_url, "http://127.0.0.1:8080");
}

#[test]
fn test_tier_parsing() {
    assert_eq!("user".parse::<Tier>().unwrap(), Tier::User);
    assert_eq!(" Plugin ".parse::<Tier>().unwrap(), Tier::Plugin);
    assert!("admin".parse::<Tier>().is_err());
    assert_eq!(Tier::default(), Tier::Plugin);
    assert_eq!(Tier::User.to_string(), "user");
}

#[test]
fn test_tier_serde() {
    assert_eq!(serde_json::to_string(&Tier::Plugin).unwrap(), "\"plugin\"");
    let tier: Tier = serde_json::from_str("\"user\"").unwrap();
    assert_eq!(tier, Tier::User);
}

#[test]
fn test_config_display_is_json() {
    let config = Config::with_credentials("id", "key", Tier::Plugin);
    let rendered = config.to_string();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["tier"], "plugin");
    assert_eq!(value["rest_api"]["timeout"], DEFAULT_REST_TIMEOUT);
}

#[test]
fn test_config_formatting_masks_the_key() {
    let config = Config::with_credentials("id", "super-secret-key", Tier::User);

    let debug = format!("{config:?}");
    let display = config.to_string();
    let credentials = format!("{:?} {}", config.credentials, config.credentials);

    for rendered in [&debug, &display, &credentials] {
        assert!(!rendered.contains("super-secret-key"), "key leaked: {rendered}");
        assert!(rendered.contains(MASKED_SECRET));
        assert!(rendered.contains("\"id\""));
    }
}

#[test]
fn test_masking_leaves_the_key_usable() {
    let config: Config = serde_json::from_value(serde_json::json!({
        "credentials": {"identifier": "id", "key": "super-secret-key"},
        "tier": "plugin",
        "rest_api": {"base_url": "https://api.crisp.chat/v1", "timeout": 30}
    }))
    .unwrap();

    assert_eq!(config.credentials.key, "super-secret-key");
    assert_eq!(
        serde_json::to_value(&config).unwrap()["credentials"]["key"],
        MASKED_SECRET
    );
}
