use juggler_core::config::GlobalConfig;
use juggler_util::errors::JugglerError;
use tempfile::TempDir;

#[test]
fn test_defaults_when_file_missing() {
    let tmp = TempDir::new().unwrap();
    let config = GlobalConfig::load_from(&tmp.path().join("config.toml")).unwrap();
    assert_eq!(config.defaults.flavor, "vanilla");
    assert!(!config.defaults.ignore_local_builds);
    assert!(config.repository.local.is_none());
    assert!(config.pins.is_empty());
}

#[test]
fn test_full_config() {
    let config = GlobalConfig::from_toml(
        r#"
[repository]
local = "/srv/juggler"
remote = "https://builds.example.com/juggler"

[defaults]
flavor = "chocolate"
ignore-local-builds = true

[pins]
SomePackage = "v1.2"
"#,
    )
    .unwrap();
    assert_eq!(
        config.local_repository(),
        Some(std::path::PathBuf::from("/srv/juggler"))
    );
    assert_eq!(
        config.repository.remote.as_deref(),
        Some("https://builds.example.com/juggler")
    );
    assert_eq!(config.defaults.flavor, "chocolate");
    assert!(config.defaults.ignore_local_builds);
    let pin = config.pinned_spec("SomePackage").unwrap().unwrap();
    assert_eq!(pin.to_string(), "v1.2");
    assert!(config.pinned_spec("Other").unwrap().is_none());
}

#[test]
fn test_non_string_pin_is_invalid_type() {
    let config = GlobalConfig::from_toml("[pins]\nSomePackage = 12\n").unwrap();
    let err = config.pinned_spec("SomePackage").unwrap_err();
    assert!(matches!(err, JugglerError::InvalidType { .. }), "got {err:?}");
}

#[test]
fn test_malformed_pin_is_invalid_string() {
    let config = GlobalConfig::from_toml("[pins]\nSomePackage = \"one\"\n").unwrap();
    let err = config.pinned_spec("SomePackage").unwrap_err();
    assert!(matches!(err, JugglerError::InvalidString { .. }), "got {err:?}");
}

#[test]
fn test_unparseable_file_is_config_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "[repository\nlocal = ").unwrap();
    let err = GlobalConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, JugglerError::Config { .. }), "got {err:?}");
}
