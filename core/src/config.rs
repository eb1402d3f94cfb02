//! Declarative option registries.
//!
//! An [`OptionsConfig`] is the serializable form of an [`Options`] registry.
//! It can be written in YAML or JSON and is turned into a validated registry
//! with [`Options::from_config`].
//!
//! # Example YAML
//!
//! ```yaml
//! options:
//!   - short: v
//!     long: verbose
//!   - short: o
//!     long: output
//!     arity: one
//!     required: true
//!   - short: D
//!     arity: unbounded
//!     value_separator: "="
//! groups:
//!   - required: true
//!     options:
//!       - short: a
//!         long: add
//!       - short: d
//!         long: delete
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::{OptionDef, OptionGroup, Options};

/// Serializable declaration of an options registry.
///
/// # Examples
///
/// ```
/// # use optline_core::OptionsConfig;
/// let yaml = r#"
/// options:
///   - short: n
///     arity: one
/// "#;
/// let config: OptionsConfig = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(config.options.len(), 1);
/// assert!(config.groups.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Options outside of any group.
    #[serde(default)]
    pub options: Vec<OptionDef>,
    /// Mutual-exclusion groups with their member options.
    #[serde(default)]
    pub groups: Vec<OptionGroup>,
}

impl OptionsConfig {
    /// Loads a declaration from a file.
    ///
    /// Files with a `.json` extension are read as JSON, anything else as
    /// YAML.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::ConfigError::IoError) if the file cannot
    /// be read, or a JSON/YAML error if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = if is_json(path) {
            serde_json::from_reader(reader)?
        } else {
            serde_yaml::from_reader(reader)?
        };
        Ok(config)
    }

    /// Saves the declaration, choosing the format from the extension like
    /// [`load`](Self::load).
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::ConfigError::IoError) if the file cannot
    /// be written, or a JSON/YAML error if serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        if is_json(path) {
            serde_json::to_writer_pretty(writer, self)?;
        } else {
            serde_yaml::to_writer(writer, self)?;
        }
        Ok(())
    }
}

impl Options {
    /// Builds a validated registry from a declaration.
    ///
    /// Ungrouped options are registered first, then each group.
    ///
    /// # Errors
    ///
    /// Returns [`Invalid`](crate::ConfigError::Invalid) on the first
    /// malformed or duplicate definition.
    pub fn from_config(config: OptionsConfig) -> Result<Self> {
        let mut options = Options::new();
        for option in config.options {
            options.add(option)?;
        }
        for group in config.groups {
            options.add_group(group)?;
        }
        Ok(options)
    }

    /// Loads and validates a registry declared in a YAML or JSON file.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use optline_core::Options;
    ///
    /// let options = Options::load("options.yaml").unwrap();
    /// println!("{} option(s)", options.len());
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_config(OptionsConfig::load(path)?)
    }

    /// Builds a registry from a YAML declaration.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Self::from_config(serde_yaml::from_str(yaml)?)
    }

    /// Builds a registry from a JSON declaration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_config(serde_json::from_str(json)?)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use crate::{Arity, ConfigError, ValidationError};

    use super::*;

    fn sample_yaml() -> &'static str {
        r#"
options:
  - short: v
    long: verbose
  - short: o
    long: output
    arity: one
    required: true
  - short: D
    arity: unbounded
    value_separator: "="
groups:
  - required: true
    options:
      - short: a
        long: add
      - short: d
        long: delete
"#
    }

    #[test]
    fn test_deserialize_complete() {
        let config: OptionsConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        assert_eq!(config.options.len(), 3);
        assert_eq!(config.options[1].arity, Arity::One);
        assert!(config.options[1].required);
        assert_eq!(config.options[2].value_separator, Some('='));
        assert_eq!(config.groups.len(), 1);
        assert!(config.groups[0].required);
    }

    #[test]
    fn test_defaults_apply() {
        let config: OptionsConfig = serde_yaml::from_str("options:\n  - short: q\n").unwrap();
        let option = &config.options[0];
        assert_eq!(option.arity, Arity::None);
        assert!(!option.required);
        assert!(option.long.is_none());
    }

    #[test]
    fn test_from_yaml_str_builds_registry() {
        let options = Options::from_yaml_str(sample_yaml()).unwrap();
        assert_eq!(options.len(), 5);
        assert_eq!(options.group_count(), 1);
        assert!(options.has_option("--delete"));
        assert_eq!(options.required_options().len(), 2);
    }

    #[test]
    fn test_from_json_str_rejects_duplicates() {
        let json = r#"{"options": [{"short": "v"}, {"short": "x", "long": "v"}]}"#;
        let err = Options::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(ValidationError::DuplicateOption(ref key)) if key == "v"
        ));
    }

    #[test]
    fn test_load_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let original: OptionsConfig = serde_yaml::from_str(sample_yaml()).unwrap();

        for name in ["options.yaml", "options.json"] {
            let path = dir.path().join(name);
            original.save(&path).unwrap();
            let loaded = OptionsConfig::load(&path).unwrap();
            assert_eq!(loaded, original);
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Options::load(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
