use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "smdi.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("io error reading config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SmdiConfig {
    #[serde(default)]
    pub generate: GenerateSection,
    #[serde(default)]
    pub merge: MergeSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateSection {
    pub rows: Option<u64>,
    pub seed: Option<i64>,
    pub out_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MergeSection {
    pub data_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Load the explicit config file, or `smdi.toml` if present.
///
/// A missing default file yields an empty config; a missing explicit file
/// is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<SmdiConfig, ConfigError> {
    let path = match explicit {
        Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.to_path_buf())),
        Some(path) => path.to_path_buf(),
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                return Ok(SmdiConfig::default());
            }
            path
        }
    };

    let content = std::fs::read_to_string(&path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<SmdiConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_sections() {
        let config = parse_config(
            r#"
                [generate]
                rows = 120
                seed = -3
                out_dir = "fixtures"

                [merge]
                output = "fixtures/combined.csv"
            "#,
        )
        .expect("parse config");

        assert_eq!(config.generate.rows, Some(120));
        assert_eq!(config.generate.seed, Some(-3));
        assert_eq!(config.generate.out_dir, Some(PathBuf::from("fixtures")));
        assert_eq!(config.merge.data_dir, None);
        assert_eq!(config.merge.output, Some(PathBuf::from("fixtures/combined.csv")));
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(parse_config("").expect("parse empty"), SmdiConfig::default());
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(matches!(
            parse_config("[generate]\nrow = 5\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("smdi_config_that_does_not_exist.toml");
        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::NotFound(_))
        ));
    }
}
