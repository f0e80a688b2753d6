use blockbaker::config::{get_config, load_config, parse_config, Config};
use blockbaker::constants::CONFIG_FILES;
use blockbaker::error::Error;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_config_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    assert!(load_config(temp_dir.path(), &CONFIG_FILES).unwrap().is_none());

    let config = get_config(temp_dir.path()).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.package, "com.tntstudios");
    assert_eq!(config.resources_dir, "src/main/resources");
    assert_eq!(config.target_version, "1.20.1");
}

#[test]
fn test_json_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("blockbaker.json"),
        r#"{"package": "dev.deli", "target_version": "1.21", "exclude": ["*_wip"]}"#,
    )
    .unwrap();

    let config = get_config(temp_dir.path()).unwrap();
    assert_eq!(config.package, "dev.deli");
    assert_eq!(config.target_version, "1.21");
    assert_eq!(config.exclude, vec!["*_wip".to_string()]);
    assert_eq!(config.java_dir, "src/main/java");
}

#[test]
fn test_yaml_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("blockbaker.yml"),
        "aux_feature: true\nblock_settings: AbstractBlock.Settings.copy(Blocks.STONE)\n",
    )
    .unwrap();

    let config = get_config(temp_dir.path()).unwrap();
    assert!(config.aux_feature);
    assert_eq!(config.block_settings, "AbstractBlock.Settings.copy(Blocks.STONE)");
}

#[test]
fn test_json_config_wins_over_yaml() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("blockbaker.json"), r#"{"package": "from.json"}"#).unwrap();
    fs::write(temp_dir.path().join("blockbaker.yaml"), "package: from.yaml\n").unwrap();

    assert_eq!(get_config(temp_dir.path()).unwrap().package, "from.json");
}

#[test]
fn test_invalid_config() {
    assert!(matches!(parse_config("unknown_key: 1"), Err(Error::ConfigError(_))));
    assert!(matches!(parse_config("package: \"\""), Err(Error::ConfigError(_))));
    assert!(matches!(parse_config("[1, 2"), Err(Error::ConfigError(_))));
}
