use crate::Config;

#[test]
fn test_defaults() {
    let config = Config::default();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.database.path, "calc.db");
    assert_eq!(config.auth.token_ttl_minutes, 30);
    assert!(config.logging.file.is_none());
}

#[test]
fn test_defaults_validate() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_toml_partial_override() {
    let config: Config = toml::from_str(
        r#"
            [server]
            port = 9000

            [auth]
            jwt_secret = "s3cret"
            token_ttl_minutes = 5
        "#,
    )
    .unwrap();

    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.auth.jwt_secret, "s3cret");
    assert_eq!(config.auth.token_ttl_minutes, 5);
}

#[test]
fn test_validate_rejects_low_port() {
    let mut config = Config::default();
    config.server.port = 80;

    assert!(config.validate().is_err());
}

#[test]
fn test_validate_allows_auto_port() {
    let mut config = Config::default();
    config.server.port = 0;

    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_empty_secret() {
    let mut config = Config::default();
    config.auth.jwt_secret = String::new();

    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_zero_ttl() {
    let mut config = Config::default();
    config.auth.token_ttl_minutes = 0;

    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_escaping_database_path() {
    let mut config = Config::default();
    config.database.path = String::from("../outside.db");
    assert!(config.validate().is_err());

    config.database.path = String::from("/absolute.db");
    assert!(config.validate().is_err());
}

#[test]
fn test_bind_addr() {
    let config = Config::default();
    assert_eq!(config.bind_addr(), "127.0.0.1:8000");
}
