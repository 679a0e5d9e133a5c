use phub_domain::config::{ApiConfig, CatalogConfig, ServerConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4650);
    assert!(server.ssl.is_none());

    let catalog = CatalogConfig::default();
    assert_eq!(catalog.default_page_size, 25);
    assert!(catalog.default_page_size <= catalog.max_page_size);
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "catalog": { "default_page_size": 10, "max_page_size": 50 }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.catalog.default_page_size, 10);
    assert_eq!(cfg.catalog.max_page_size, 50);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let cfg: ApiConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert_eq!(cfg.server.port, 4650);
    assert_eq!(cfg.catalog.max_page_size, 100);
}
