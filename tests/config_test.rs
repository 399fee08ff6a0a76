// tests/config_test.rs
use release_bump::config::{load_config, Config, OnMissingTag, LOCAL_CONFIG_FILE};
use release_bump::planner::MissingTagPolicy;
use serial_test::serial;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.branches.develop, "develop");
    assert_eq!(config.branches.main, "main");
    assert_eq!(config.release.stage_suffix, "stage");
    assert_eq!(
        config.release.breaking_change_indicators,
        vec!["BREAKING CHANGE:".to_string()]
    );
    assert_eq!(config.release.tag_pattern, "{version}");
    assert_eq!(config.bootstrap.on_missing_tag, OnMissingTag::Initial);
    assert_eq!(config.bootstrap.initial_version, "1.0.0");
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[branches]
main = "trunk"

[release]
breaking_change_indicators = ["BREAKING CHANGE:", "BREAKING-CHANGE:"]
tag_message = "Ship {version}"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.branches.main, "trunk");
    assert_eq!(config.branches.develop, "develop");
    assert_eq!(config.release.breaking_change_indicators.len(), 2);
    assert_eq!(config.release.render_tag_message("2.0.0"), "Ship 2.0.0");
}

#[test]
#[serial]
fn test_fixture_custom_branches() {
    let config = load_config(Some("tests/fixtures/custom_branches.toml"))
        .expect("Failed to load test config");

    let planner = config.planner();
    assert_eq!(
        planner.plan("dev", "1.2.3", false).unwrap().to_string(),
        "1.2.4-rc"
    );
    assert_eq!(
        planner.plan("master", "1.2.3", true).unwrap().to_string(),
        "2.0.0"
    );
    assert!(planner.plan("main", "1.2.3", false).is_err());
    assert_eq!(config.release.render_tag_name("2.0.0"), "v2.0.0");
}

#[test]
#[serial]
fn test_fixture_strict_bootstrap() {
    let config = load_config(Some("tests/fixtures/strict_bootstrap.toml"))
        .expect("Failed to load test config");
    assert_eq!(config.missing_tag_policy().unwrap(), MissingTagPolicy::Fail);
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    assert!(load_config(Some("tests/fixtures/does_not_exist.toml")).is_err());
}

#[test]
#[serial]
fn test_load_from_working_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(LOCAL_CONFIG_FILE),
        "[release]\nstage_suffix = \"beta\"\n",
    )
    .unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    std::env::set_current_dir(original).unwrap();

    assert_eq!(result.unwrap().release.stage_suffix, "beta");
}
