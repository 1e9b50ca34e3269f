//! Configuration with multi-source loading.
//!
//! Priority: CLI > Environment (`FOB_SUPERJSON_*`) > `fob-superjson.json` > Defaults

use crate::cli::{ProjectArgs, TransformArgs};
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use fob_gen::{FormatOptions, QuoteStyle};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the project root
pub const CONFIG_FILE: &str = "fob-superjson.json";

/// Prefix of environment overrides (`FOB_SUPERJSON_SINGLE_QUOTE=true`)
pub const ENV_PREFIX: &str = "FOB_SUPERJSON_";

/// Driver configuration - loaded from fob-superjson.json, env and CLI args.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SuperJsonConfig {
    /// Project root; module paths are classified relative to it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,

    /// Rewrite files in place
    #[serde(default)]
    pub write: bool,

    /// Report files that would change and fail
    #[serde(default)]
    pub check: bool,

    /// Directory names never descended into
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,

    /// Print string literals with single quotes
    #[serde(default)]
    pub single_quote: bool,
}

fn default_ignore() -> Vec<String> {
    ["node_modules", ".next", ".git"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for SuperJsonConfig {
    fn default() -> Self {
        Self {
            cwd: None,
            write: false,
            check: false,
            ignore: default_ignore(),
            single_quote: false,
        }
    }
}

/// Values given on the command line; unset flags leave lower layers alone
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_quote: Option<bool>,
}

impl ConfigOverrides {
    pub fn from_project(project: &ProjectArgs) -> Self {
        Self {
            cwd: project.cwd.clone(),
            ..Self::default()
        }
    }

    pub fn from_transform(args: &TransformArgs) -> Self {
        Self {
            write: args.write.then_some(true),
            check: args.check.then_some(true),
            single_quote: args.single_quote.then_some(true),
            ..Self::from_project(&args.project)
        }
    }
}

impl SuperJsonConfig {
    /// Load configuration from every source and validate it.
    pub fn load(project: &ProjectArgs, overrides: ConfigOverrides) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = config_file(project)? {
            tracing::debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Json::file(path));
        }

        figment = figment
            .merge(Env::prefixed(ENV_PREFIX).map(|key| camel_case(key.as_str()).into()))
            .merge(Serialized::defaults(overrides));

        let config: Self = figment
            .extract()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.write && self.check {
            return Err(ConfigError::ConflictingOptions(
                "`write` and `check` cannot both be enabled".to_string(),
            )
            .into());
        }
        Ok(())
    }

    /// Absolute project root: `cwd` if set, otherwise the process directory
    pub fn project_root(&self) -> Result<PathBuf> {
        let root = match &self.cwd {
            Some(cwd) => cwd.clone(),
            None => std::env::current_dir()?,
        };
        Ok(std::path::absolute(root)?)
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            quote_style: if self.single_quote {
                QuoteStyle::Single
            } else {
                QuoteStyle::Double
            },
        }
    }

    /// True when `name` is a directory name discovery skips
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore.iter().any(|ignored| ignored == name)
    }
}

/// Explicit `--config` (must exist), else `fob-superjson.json` in the root if present
fn config_file(project: &ProjectArgs) -> Result<Option<PathBuf>> {
    if let Some(path) = &project.config {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.clone()).into());
        }
        return Ok(Some(path.clone()));
    }

    let root = project.cwd.as_deref().unwrap_or(Path::new("."));
    let default_path = root.join(CONFIG_FILE);
    Ok(default_path.is_file().then_some(default_path))
}

/// `single_quote` -> `singleQuote`
fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper = false;
    for c in key.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn project_in(dir: &Path) -> ProjectArgs {
        ProjectArgs {
            cwd: Some(dir.to_path_buf()),
            config: None,
        }
    }

    #[test]
    fn test_defaults() {
        let config = SuperJsonConfig::default();
        assert!(!config.write);
        assert!(!config.check);
        assert!(config.is_ignored("node_modules"));
        assert!(config.is_ignored(".next"));
        assert!(!config.is_ignored("pages"));
        assert_eq!(config.format_options().quote_style, QuoteStyle::Double);
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let config = SuperJsonConfig {
            single_quote: true,
            ..SuperJsonConfig::default()
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json.get("singleQuote"), Some(&serde_json::Value::Bool(true)));
        assert!(json.get("single_quote").is_none());
        assert!(json.get("cwd").is_none());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: std::result::Result<SuperJsonConfig, _> =
            serde_json::from_str(r#"{ "singleQuotes": true }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_write_and_check_conflict() {
        let config = SuperJsonConfig {
            write: true,
            check: true,
            ..SuperJsonConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::ConflictingOptions(_))));
    }

    #[test]
    #[serial]
    fn test_file_is_loaded_from_project_root() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE),
            r#"{ "singleQuote": true, "ignore": ["vendor"] }"#,
        )
        .unwrap();

        let config =
            SuperJsonConfig::load(&project_in(temp.path()), ConfigOverrides::default()).unwrap();
        assert!(config.single_quote);
        assert_eq!(config.ignore, vec!["vendor".to_string()]);
        assert_eq!(config.format_options().quote_style, QuoteStyle::Single);
    }

    #[test]
    #[serial]
    fn test_cli_overrides_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), r#"{ "check": true }"#).unwrap();

        let overrides = ConfigOverrides {
            check: Some(false),
            write: Some(true),
            ..ConfigOverrides::default()
        };
        let config = SuperJsonConfig::load(&project_in(temp.path()), overrides).unwrap();
        assert!(config.write);
        assert!(!config.check);
    }

    #[test]
    #[serial]
    fn test_file_and_flag_conflict_is_reported() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), r#"{ "check": true }"#).unwrap();

        let overrides = ConfigOverrides {
            write: Some(true),
            ..ConfigOverrides::default()
        };
        assert!(SuperJsonConfig::load(&project_in(temp.path()), overrides).is_err());
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), r#"{ "singleQuote": false }"#).unwrap();

        unsafe { std::env::set_var("FOB_SUPERJSON_SINGLE_QUOTE", "true") };
        let config = SuperJsonConfig::load(&project_in(temp.path()), ConfigOverrides::default());
        unsafe { std::env::remove_var("FOB_SUPERJSON_SINGLE_QUOTE") };

        assert!(config.unwrap().single_quote);
    }

    #[test]
    #[serial]
    fn test_missing_explicit_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let project = ProjectArgs {
            cwd: Some(temp.path().to_path_buf()),
            config: Some(temp.path().join("missing.json")),
        };
        let err = SuperJsonConfig::load(&project, ConfigOverrides::default()).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::NotFound(_))));
    }

    #[test]
    #[serial]
    fn test_malformed_file_is_invalid() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), r#"{ "write": "yes please" }"#).unwrap();

        let err = SuperJsonConfig::load(&project_in(temp.path()), ConfigOverrides::default())
            .unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("single_quote"), "singleQuote");
        assert_eq!(camel_case("write"), "write");
        assert_eq!(camel_case("CWD"), "cwd");
    }
}
