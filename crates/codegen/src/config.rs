//! Generator configuration, loaded from an optional TOML file.
//!
//! ```toml
//! target = "rust"
//! docs_url = "https://docs.mathesar.org/0.4.0/api/methods/"
//! fetch_timeout_secs = 30
//!
//! [substitutions.attr_types]
//! ConfiguredServerInfo = "Any"
//! tuple = "list"
//!
//! [substitutions.return_types]
//! ConstraintInfo = "Any"
//!
//! [substitutions.absent_keys]
//! SchemaPatch = ["name", "description"]
//!
//! [output]
//! records_file = "types.rs"
//! methods_file = "api.rs"
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::emit::Target;
use crate::error::{CodegenError, CodegenResult};

pub const DEFAULT_DOCS_URL: &str = "https://docs.mathesar.org/0.4.0/api/methods/";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub target: Target,
    pub docs_url: String,
    pub fetch_timeout_secs: u64,
    pub substitutions: Substitutions,
    pub output: OutputConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            target: Target::default(),
            docs_url: DEFAULT_DOCS_URL.to_string(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            substitutions: Substitutions::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Type replacements applied while scraping.
///
/// Attribute types are replaced on exact match; return types on whole
/// identifier occurrences. `absent_keys` lists, per class, the attributes
/// whose key may be missing; their types are wrapped in `NotRequired[...]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Substitutions {
    pub attr_types: BTreeMap<String, String>,
    pub return_types: BTreeMap<String, String>,
    pub absent_keys: BTreeMap<String, Vec<String>>,
}

impl Default for Substitutions {
    fn default() -> Self {
        Self {
            attr_types: BTreeMap::from([
                ("ConfiguredServerInfo".to_string(), "Any".to_string()),
                ("tuple".to_string(), "list".to_string()),
            ]),
            return_types: BTreeMap::from([("ConstraintInfo".to_string(), "Any".to_string())]),
            absent_keys: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Overrides the target's default record file name
    pub records_file: Option<String>,
    /// Overrides the target's default method file name
    pub methods_file: Option<String>,
}

/// Resolved output file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFiles {
    pub records: String,
    pub methods: String,
}

impl GeneratorConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> CodegenResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|err| CodegenError::io(path, err))?;
        Self::from_toml(&text).map_err(|message| CodegenError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn from_toml(text: &str) -> Result<Self, String> {
        toml::from_str(text).map_err(|err| err.to_string())
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> CodegenResult<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn output_files(&self) -> OutputFiles {
        let (records, methods) = self.target.default_file_names();
        OutputFiles {
            records: self
                .output
                .records_file
                .clone()
                .unwrap_or_else(|| records.to_string()),
            methods: self
                .output
                .methods_file
                .clone()
                .unwrap_or_else(|| methods.to_string()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::from_toml("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.target, Target::Python);
        assert_eq!(config.docs_url, DEFAULT_DOCS_URL);
        assert_eq!(config.fetch_timeout(), Duration::from_secs(30));
        assert_eq!(
            config.output_files(),
            OutputFiles {
                records: "classes.py".into(),
                methods: "api.py".into(),
            }
        );
        assert_eq!(
            config.substitutions.return_types.get("ConstraintInfo").map(String::as_str),
            Some("Any")
        );
        assert_eq!(
            config.substitutions.attr_types.get("tuple").map(String::as_str),
            Some("list")
        );
        assert!(config.substitutions.absent_keys.is_empty());
    }

    #[test]
    fn test_rust_target_with_overrides() {
        let config = GeneratorConfig::from_toml(
            r#"
            target = "rust"
            fetch_timeout_secs = 5

            [substitutions.attr_types]
            Foo = "Any"

            [substitutions.absent_keys]
            SchemaPatch = ["name", "description"]

            [output]
            methods_file = "stubs.rs"
            "#,
        )
        .unwrap();
        assert_eq!(config.target, Target::Rust);
        assert_eq!(
            config.output_files(),
            OutputFiles {
                records: "types.rs".into(),
                methods: "stubs.rs".into(),
            }
        );
        assert!(config.substitutions.return_types.contains_key("ConstraintInfo"));
        assert_eq!(
            config.substitutions.attr_types.keys().collect::<Vec<_>>(),
            vec!["Foo"]
        );
        assert_eq!(
            config.substitutions.absent_keys["SchemaPatch"],
            vec!["name", "description"]
        );
    }

    #[test]
    fn test_client_config_keeps_default_substitutions() {
        let config = GeneratorConfig::from_toml(include_str!("../../client/codegen.toml")).unwrap();
        assert_eq!(config.target, Target::Rust);
        assert_eq!(
            config.substitutions.attr_types,
            Substitutions::default().attr_types
        );
        assert_eq!(config.substitutions.absent_keys["TypeOptions"].len(), 5);
        assert_eq!(
            config.output_files(),
            OutputFiles {
                records: "types.rs".into(),
                methods: "api.rs".into(),
            }
        );
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(GeneratorConfig::from_toml("targett = \"rust\"").is_err());
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codegen.toml");
        std::fs::write(&path, "target = \"cobol\"").unwrap();
        let err = GeneratorConfig::load(&path).unwrap_err();
        assert!(matches!(err, CodegenError::Config { path: p, .. } if p == path));
    }
}
