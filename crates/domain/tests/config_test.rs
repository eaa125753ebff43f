use ferrous_doh_domain::config::LogFormat;
use ferrous_doh_domain::{Config, ConfigError};

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.port, 8053);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.providers.len(), 5);
    assert_eq!(config.providers[0].name, "cloudflare");
    assert_eq!(config.race.racing_width, 3);
    assert_eq!(config.race.timeout_ms, 3000);
    assert_eq!(config.health.reset_interval_ms, 60_000);
    assert!(config.cache.enabled);
    assert_eq!(config.cache.max_entries, 5000);
    assert_eq!(config.cache.eviction_batch, 100);
    assert_eq!(config.cache.default_ttl_ms, 300_000);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Text);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_empty_file_uses_defaults() {
    let config = Config::from_toml("").unwrap();
    assert_eq!(config.providers.len(), 5);
    assert_eq!(config.cache.max_entries, 5000);
}

#[test]
fn test_config_parses_custom_providers() {
    let toml_str = r#"
        [server]
        port = 9000

        [[providers]]
        name = "primary"
        url = "https://doh.example/dns-query"

        [[providers]]
        name = "secondary"
        url = "http://127.0.0.1:8080/dns-query"

        [race]
        racing_width = 2
        timeout_ms = 1500

        [cache]
        max_entries = 10
    "#;

    let config = Config::from_toml(toml_str).unwrap();
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.providers.len(), 2);
    assert_eq!(config.race.racing_width, 2);
    assert_eq!(config.race.timeout_ms, 1500);
    assert_eq!(config.cache.max_entries, 10);
    assert_eq!(config.cache.eviction_batch, 100);

    let providers = config.provider_list();
    assert_eq!(&*providers[1].name, "secondary");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_rejects_empty_provider_list() {
    let config = Config::from_toml("providers = []").unwrap();
    assert!(matches!(config.validate(), Err(ConfigError::NoProviders)));
}

#[test]
fn test_config_rejects_duplicate_provider_names() {
    let toml_str = r#"
        [[providers]]
        name = "dup"
        url = "https://a.example/dns-query"

        [[providers]]
        name = "dup"
        url = "https://b.example/dns-query"
    "#;
    let config = Config::from_toml(toml_str).unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidProvider { ref name, .. } if name == "dup"));
    assert!(err.to_string().contains("duplicate provider name"));
}

#[test]
fn test_config_rejects_non_http_url() {
    let toml_str = r#"
        [[providers]]
        name = "udp"
        url = "udp://8.8.8.8:53"
    "#;
    let config = Config::from_toml(toml_str).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidProvider { .. })
    ));
}

#[test]
fn test_config_rejects_zero_racing_width() {
    let mut config = Config::default();
    config.race.racing_width = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue {
            field: "race.racing_width",
            ..
        })
    ));
}

#[test]
fn test_config_rejects_zero_eviction_batch() {
    let mut config = Config::default();
    config.cache.eviction_batch = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue {
            field: "cache.eviction_batch",
            ..
        })
    ));
}

#[test]
fn test_config_parse_error() {
    let result = Config::from_toml("[server\nport = ");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_parses_json_log_format() {
    let config = Config::from_toml("[logging]\nlevel = \"debug\"\nformat = \"json\"").unwrap();
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_config_missing_file_is_read_error() {
    let result = Config::load(
        Some("/nonexistent/ferrous-doh.toml"),
        ferrous_doh_domain::CliOverrides::default(),
    );
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn test_cli_overrides_apply_before_validation() {
    let dir = std::env::temp_dir().join(format!("ferrous-doh-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, "[server]\nport = 9000\n").unwrap();

    let config = Config::load(
        path.to_str(),
        ferrous_doh_domain::CliOverrides {
            port: Some(9443),
            bind_address: Some("127.0.0.1".to_string()),
            log_level: Some("trace".to_string()),
        },
    )
    .unwrap();

    assert_eq!(config.server.port, 9443);
    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.logging.level, "trace");
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_server_socket_addr_accepts_ipv6() {
    let config = Config::from_toml("[server]\nbind_address = \"::\"\nport = 443").unwrap();
    let addr = config.server.socket_addr().unwrap();
    assert!(addr.is_ipv6());
    assert_eq!(addr.port(), 443);
    assert!(config.validate().is_ok());

    let bracketed = Config::from_toml("[server]\nbind_address = \"[::1]\"").unwrap();
    assert_eq!(
        bracketed.server.socket_addr().unwrap().to_string(),
        "[::1]:8053"
    );
}

#[test]
fn test_server_socket_addr_ipv4_default() {
    let config = Config::default();
    assert_eq!(config.server.socket_addr().unwrap().to_string(), "0.0.0.0:8053");
}

#[test]
fn test_config_rejects_hostname_bind_address() {
    let mut config = Config::default();
    config.server.bind_address = "localhost".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue {
            field: "server.bind_address",
            ..
        })
    ));
}
