use std::path::Path;

use folio::config::{Config, LogLevel};
use folio::error::ConfigError;
use log::LevelFilter;

#[test]
fn test_empty_document_is_all_defaults() {
    let config = Config::parse("").expect("empty config parses");
    assert_eq!(config, Config::default());
    assert_eq!(config.reveal.threshold, 0.2);
    assert_eq!(config.reveal.stagger_ms, 100);
    assert_eq!(config.nav.scroll_threshold, 2);
    assert_eq!(config.nav.settle_delay_ms, 10);
    assert_eq!(config.content.nav.len(), 4);
}

#[test]
fn test_partial_sections_keep_other_defaults() {
    let config = Config::parse(
        r#"
log_level = "debug"

[reveal]
stagger_ms = 50

[nav]
scroll_threshold = 50
"#,
    )
    .expect("config parses");

    assert_eq!(config.reveal.stagger_ms, 50);
    assert_eq!(config.reveal.duration_ms, 700);
    assert_eq!(config.nav.scroll_threshold, 50);
    assert_eq!(config.nav.initial_height, 3);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.log_level.filter(), LevelFilter::Debug);
}

#[test]
fn test_content_can_be_replaced() {
    let config = Config::parse(
        r##"
[content.profile]
first_name = "Ada"
last_name = "Lovelace"

[[content.nav]]
label = "Work"
href = "#projects"
"##,
    )
    .expect("config parses");

    assert_eq!(config.content.profile.full_name(), "Ada Lovelace");
    assert_eq!(config.content.profile.monogram, "AS.");
    assert_eq!(config.content.nav.len(), 1);
    assert_eq!(config.content.nav[0].href, "#projects");
}

#[test]
fn test_unknown_log_level_is_rejected() {
    assert!(Config::parse(r#"log_level = "loud""#).is_err());
}

#[test]
fn test_explicit_missing_file_is_a_read_error() {
    let err = Config::load(Some(Path::new("/nonexistent/folio.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("/nonexistent/folio.toml"));
}
