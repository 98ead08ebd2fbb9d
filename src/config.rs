//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treexfer/treexfer.toml`
//! 3. Local config: `<project_dir>/.treexfer.toml`
//! 4. Environment variables: `TREEXFER_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Interactive picker configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PickerConfig {
    /// Prompt shown by the picker
    pub prompt: String,
    /// Picker height, absolute lines or percentage (e.g. "50%")
    pub height: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            prompt: "node> ".into(),
            height: "50%".into(),
        }
    }
}

/// Raw picker config for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawPickerConfig {
    pub prompt: Option<String>,
    pub height: Option<String>,
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub seed_file: Option<PathBuf>,
    pub preview: Option<bool>,
    #[serde(default)]
    pub picker: RawPickerConfig,
}

/// Unified configuration for treexfer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// TOML file with the initial left-pane tree (default: built-in sample)
    pub seed_file: Option<PathBuf>,
    /// Render the selected subtree below the panes
    pub preview: bool,
    /// Interactive picker settings
    pub picker: PickerConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed_file: None,
            preview: true,
            picker: PickerConfig::default(),
        }
    }
}

/// Get the XDG config directory for treexfer.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treexfer").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treexfer.toml"))
}

/// Get the path to the local config file in a project directory.
pub fn local_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(".treexfer.toml")
}

/// Expand `~`, `$VAR` and `${VAR}` in a path string.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

/// Load a TOML file into RawSettings for manual merging.
///
/// A relative `seed_file` is resolved against the directory of the config file.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    let mut raw: RawSettings = toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })?;

    if let Some(seed) = raw.seed_file.take() {
        let expanded = PathBuf::from(expand_env_vars(seed.to_string_lossy().as_ref()));
        raw.seed_file = Some(match path.parent() {
            Some(dir) if expanded.is_relative() => dir.join(expanded),
            _ => expanded,
        });
    }
    Ok(raw)
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        if let Some(seed) = &self.seed_file {
            self.seed_file = Some(PathBuf::from(expand_env_vars(
                seed.to_string_lossy().as_ref(),
            )));
        }
    }

    /// Merge overlay config onto self (base): overlay wins where specified.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            seed_file: overlay
                .seed_file
                .clone()
                .or_else(|| self.seed_file.clone()),
            preview: overlay.preview.unwrap_or(self.preview),
            picker: PickerConfig {
                prompt: overlay
                    .picker
                    .prompt
                    .clone()
                    .unwrap_or_else(|| self.picker.prompt.clone()),
                height: overlay
                    .picker
                    .height
                    .clone()
                    .unwrap_or_else(|| self.picker.height.clone()),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `project_dir` - Optional project directory for local config
    pub fn load(project_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref(), project_dir)
    }

    /// Same as [`Settings::load`] with an explicit global config location.
    pub fn load_from(
        global_path: Option<&Path>,
        project_dir: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_path {
            if global_path.exists() {
                let raw = load_raw_settings(global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Project-local config
        if let Some(project) = project_dir {
            let local_path = local_config_path(project);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 4. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        current.expand_paths();

        Ok(current)
    }

    /// Apply TREEXFER_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("TREEXFER").separator("__"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("seed_file") {
            settings.seed_file = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_bool("preview") {
            settings.preview = val;
        }
        if let Ok(val) = config.get_string("picker.prompt") {
            settings.picker.prompt = val;
        }
        if let Ok(val) = config.get_string("picker.height") {
            settings.picker.height = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# treexfer configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/treexfer/treexfer.toml
#   Local:  <project_dir>/.treexfer.toml
#   Env:    TREEXFER_* environment variables (TREEXFER_PICKER__PROMPT for nested keys)

# Initial left-pane tree; relative paths resolve against this file's directory.
# The file holds nested tables:
#   id = "(root)"
#   [[children]]
#   id = "node1"
# seed_file = "seed.toml"

# Render the selected subtree below the panes
# preview = true

[picker]
# prompt = "node> "
# height = "50%"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
