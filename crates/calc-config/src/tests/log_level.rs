use crate::LogLevel;

use std::str::FromStr;

use log::LevelFilter;

#[test]
fn test_from_str_known_levels() {
    assert_eq!(LogLevel::from_str("off").unwrap().0, LevelFilter::Off);
    assert_eq!(LogLevel::from_str("error").unwrap().0, LevelFilter::Error);
    assert_eq!(LogLevel::from_str("warn").unwrap().0, LevelFilter::Warn);
    assert_eq!(LogLevel::from_str("info").unwrap().0, LevelFilter::Info);
    assert_eq!(LogLevel::from_str("debug").unwrap().0, LevelFilter::Debug);
    assert_eq!(LogLevel::from_str("trace").unwrap().0, LevelFilter::Trace);
}

#[test]
fn test_from_str_is_case_insensitive() {
    assert_eq!(LogLevel::from_str("DEBUG").unwrap().0, LevelFilter::Debug);
    assert_eq!(LogLevel::from_str("Warn").unwrap().0, LevelFilter::Warn);
}

#[test]
fn test_from_str_defaults_to_info() {
    assert_eq!(LogLevel::from_str("nonsense").unwrap().0, LevelFilter::Info);
    assert_eq!(LogLevel::from_str("").unwrap().0, LevelFilter::Info);
}

#[test]
fn test_deserialize_accepts_strings_only() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        level: LogLevel,
    }

    let wrapper: Wrapper = toml::from_str(r#"level = "debug""#).unwrap();
    assert_eq!(wrapper.level.0, LevelFilter::Debug);

    assert!(toml::from_str::<Wrapper>("level = 5").is_err());
}
