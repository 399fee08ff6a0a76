use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::branch::{DEVELOP_BRANCH, MAIN_BRANCH};
use crate::domain::commit::BREAKING_CHANGE_PREFIX;
use crate::domain::decision::STAGE_SUFFIX;
use crate::error::{ReleaseBumpError, Result};
use crate::planner::{MissingTagPolicy, VersionPlanner};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "releasebump.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".releasebump.toml";

/// Represents the complete configuration for release-bump.
///
/// Contains branch names, release formatting and the bootstrap behavior for
/// repositories without a prior release tag.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub branches: BranchesConfig,

    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub bootstrap: BootstrapConfig,
}

fn default_develop_branch() -> String {
    DEVELOP_BRANCH.to_string()
}

fn default_main_branch() -> String {
    MAIN_BRANCH.to_string()
}

/// Names of the branches the bump policy knows about.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BranchesConfig {
    #[serde(default = "default_develop_branch")]
    pub develop: String,

    #[serde(default = "default_main_branch")]
    pub main: String,
}

impl Default for BranchesConfig {
    fn default() -> Self {
        BranchesConfig {
            develop: default_develop_branch(),
            main: default_main_branch(),
        }
    }
}

fn default_stage_suffix() -> String {
    STAGE_SUFFIX.to_string()
}

/// Returns the default list of breaking change indicators.
fn default_breaking_change_indicators() -> Vec<String> {
    vec![BREAKING_CHANGE_PREFIX.to_string()]
}

fn default_tag_pattern() -> String {
    "{version}".to_string()
}

fn default_tag_message() -> String {
    "Release version {version}".to_string()
}

/// How releases are labelled, detected and tagged.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_stage_suffix")]
    pub stage_suffix: String,

    #[serde(default = "default_breaking_change_indicators")]
    pub breaking_change_indicators: Vec<String>,

    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    #[serde(default = "default_tag_message")]
    pub tag_message: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            stage_suffix: default_stage_suffix(),
            breaking_change_indicators: default_breaking_change_indicators(),
            tag_pattern: default_tag_pattern(),
            tag_message: default_tag_message(),
        }
    }
}

impl ReleaseConfig {
    /// Render the tag name for a computed version
    pub fn render_tag_name(&self, version: &str) -> String {
        self.tag_pattern.replace("{version}", version)
    }

    /// Render the annotation message for a computed version
    pub fn render_tag_message(&self, version: &str) -> String {
        self.tag_message.replace("{version}", version)
    }
}

/// Behavior when no prior release tag exists.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OnMissingTag {
    #[default]
    Initial,
    Fail,
}

fn default_initial_version() -> String {
    "1.0.0".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BootstrapConfig {
    #[serde(default)]
    pub on_missing_tag: OnMissingTag,

    #[serde(default = "default_initial_version")]
    pub initial_version: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        BootstrapConfig {
            on_missing_tag: OnMissingTag::default(),
            initial_version: default_initial_version(),
        }
    }
}

impl Config {
    /// Build the planner described by this configuration
    pub fn planner(&self) -> VersionPlanner {
        VersionPlanner::new(
            self.branches.develop.clone(),
            self.branches.main.clone(),
            self.release.stage_suffix.clone(),
        )
    }

    /// Resolve the missing-tag policy, validating the initial version
    pub fn missing_tag_policy(&self) -> Result<MissingTagPolicy> {
        match self.bootstrap.on_missing_tag {
            OnMissingTag::Fail => Ok(MissingTagPolicy::Fail),
            OnMissingTag::Initial => {
                let raw = &self.bootstrap.initial_version;
                let version = VersionPlanner::normalize(raw)
                    .and_then(|cleaned| VersionPlanner::parse_version(&cleaned))
                    .map_err(|e| {
                        ReleaseBumpError::config(format!(
                            "bootstrap.initial_version '{}': {}",
                            raw, e
                        ))
                    })?;
                Ok(MissingTagPolicy::Initial(version))
            }
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasebump.toml` in current directory
/// 3. `.releasebump.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses configuration from TOML text
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config =
        toml::from_str(config_str).map_err(|e| ReleaseBumpError::config(e.to_string()))?;
    validate_stage_suffix(&config.release.stage_suffix)?;
    Ok(config)
}

/// The staging label must be a non-empty semver pre-release identifier
fn validate_stage_suffix(suffix: &str) -> Result<()> {
    if suffix.is_empty() {
        return Err(ReleaseBumpError::config(
            "release.stage_suffix must not be empty",
        ));
    }
    semver::Prerelease::new(suffix).map_err(|e| {
        ReleaseBumpError::config(format!("release.stage_suffix '{}': {}", suffix, e))
    })?;
    Ok(())
}
