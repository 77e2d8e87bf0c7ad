use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::StyleFamily;

/// Name of the config file looked up in the project directory
pub const CONFIG_FILE: &str = "promptstyler.toml";

/// Configuration loaded from promptstyler.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalogues: CataloguesConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    /// Extra families, or replacements for built-in rows with the same id
    #[serde(default)]
    pub families: Vec<StyleFamily>,
}

/// Catalogue location configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CataloguesConfig {
    /// Directory holding the catalogue JSON files
    #[serde(default = "default_styles_dir")]
    pub dir: PathBuf,
}

impl Default for CataloguesConfig {
    fn default() -> Self {
        Self {
            dir: default_styles_dir(),
        }
    }
}

fn default_styles_dir() -> PathBuf {
    PathBuf::from("styles")
}

/// Behavior configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Report inputs and outputs of every resolve call
    #[serde(default)]
    pub log_prompt: bool,
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))
    }

    /// Try to load config from promptstyler.toml in the given directory
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge CLI overrides into the config
    pub fn with_overrides(mut self, styles_dir: Option<PathBuf>, log_prompt: bool) -> Self {
        if let Some(dir) = styles_dir {
            self.catalogues.dir = dir;
        }
        if log_prompt {
            self.behavior.log_prompt = true;
        }
        self
    }

    /// Styles directory, resolved against the project root when relative
    pub fn styles_dir(&self, project_root: &Path) -> PathBuf {
        if self.catalogues.dir.is_absolute() {
            self.catalogues.dir.clone()
        } else {
            project_root.join(&self.catalogues.dir)
        }
    }

    /// Built-in families with configured rows applied on top
    ///
    /// A configured row replaces the built-in row with the same id in place;
    /// new ids are appended in config order.
    pub fn families(&self) -> Vec<StyleFamily> {
        let mut families = StyleFamily::builtin();
        for configured in &self.families {
            match families.iter_mut().find(|f| f.id == configured.id) {
                Some(existing) => *existing = configured.clone(),
                None => families.push(configured.clone()),
            }
        }
        families
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(PathBuf, toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.catalogues.dir, PathBuf::from("styles"));
        assert!(!config.behavior.log_prompt);
        assert!(config.families.is_empty());
    }

    #[test]
    fn test_config_with_overrides() {
        let config = Config::default().with_overrides(Some(PathBuf::from("/srv/styles")), true);
        assert_eq!(config.catalogues.dir, PathBuf::from("/srv/styles"));
        assert!(config.behavior.log_prompt);
    }

    #[test]
    fn test_overrides_keep_configured_log_prompt() {
        let mut config = Config::default();
        config.behavior.log_prompt = true;
        let config = config.with_overrides(None, false);
        assert!(config.behavior.log_prompt);
        assert_eq!(config.catalogues.dir, PathBuf::from("styles"));
    }

    #[test]
    fn test_styles_dir_relative_and_absolute() {
        let config = Config::default();
        assert_eq!(
            config.styles_dir(Path::new("/project")),
            PathBuf::from("/project/styles")
        );

        let config = config.with_overrides(Some(PathBuf::from("/abs/styles")), false);
        assert_eq!(
            config.styles_dir(Path::new("/project")),
            PathBuf::from("/abs/styles")
        );
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
[catalogues]
dir = "data/styles"

[behavior]
log_prompt = true

[[families]]
id = "misc"
file = "my_misc.json"
display_name = "Prompt Styler Misc (local)"

[[families]]
id = "studio"
file = "studio.json"
display_name = "Prompt Styler Studio"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.catalogues.dir, PathBuf::from("data/styles"));
        assert!(config.behavior.log_prompt);

        let families = config.families();
        let builtin_len = StyleFamily::builtin().len();
        assert_eq!(families.len(), builtin_len + 1);

        let misc = families.iter().find(|f| f.id == "misc").unwrap();
        assert_eq!(misc.file, PathBuf::from("my_misc.json"));
        assert_eq!(families.last().unwrap().id, "studio");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[behavior]\nlog_prompt = true\n").unwrap();
        assert_eq!(config.catalogues.dir, PathBuf::from("styles"));
        assert_eq!(config.families().len(), StyleFamily::builtin().len());
    }
}
