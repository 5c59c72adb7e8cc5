//! Configuration management for md2adf.
//!
//! Parses `md2adf.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String values in the `[atlassian]` section support environment variable
//! expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! ## Example
//!
//! ```toml
//! [jira]
//! project_key = "OPS"
//! default_issue_type = "Task"
//! default_epic = "OPS-100"
//!
//! [confluence]
//! space_key = "ENG"
//! parent_page_id = "123456"
//!
//! [atlassian]
//! base_url = "https://acme.atlassian.net"
//! email = "${ATLASSIAN_EMAIL}"
//! api_token = "${ATLASSIAN_API_TOKEN}"
//! ```

mod credentials;
mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub use credentials::{
    API_TOKEN_VAR, AtlassianConfig, BASE_URL_VAR, CredentialSource, Credentials, EMAIL_VAR,
};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override Jira project key.
    pub project_key: Option<String>,
    /// Override default epic for new issues.
    pub default_epic: Option<String>,
    /// Override default issue type for new issues.
    pub default_issue_type: Option<String>,
    /// Override Confluence space key.
    pub confluence_space_key: Option<String>,
    /// Override parent page for new Confluence pages.
    pub confluence_parent_page_id: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "md2adf.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Jira project configuration.
    pub jira: Option<JiraConfig>,
    /// Confluence space configuration.
    pub confluence: Option<ConfluenceConfig>,
    /// Atlassian credentials (optional section).
    pub atlassian: Option<AtlassianConfig>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Jira project configuration.
#[derive(Debug, Deserialize)]
pub struct JiraConfig {
    /// Project key, e.g. `OPS`.
    pub project_key: String,
    /// Agile board ID.
    #[serde(default)]
    pub board_id: Option<u64>,
    /// Issue type for new issues.
    #[serde(default = "default_issue_type")]
    pub default_issue_type: String,
    /// Epic new issues are linked to unless another is given.
    #[serde(default)]
    pub default_epic: Option<String>,
}

impl JiraConfig {
    fn new(project_key: String) -> Self {
        Self {
            project_key,
            board_id: None,
            default_issue_type: default_issue_type(),
            default_epic: None,
        }
    }

    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.project_key, "jira.project_key")?;
        require_non_empty(&self.default_issue_type, "jira.default_issue_type")?;
        Ok(())
    }
}

/// Confluence space configuration.
///
/// Pages are created in the space given by `space_id`, or by `space_key`
/// which is then looked up. Searches are scoped to `space_key` when set.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfluenceConfig {
    /// Space key, e.g. `ENG`.
    pub space_key: Option<String>,
    /// Numeric space ID, skips the key lookup.
    pub space_id: Option<String>,
    /// Parent page for new pages.
    pub parent_page_id: Option<String>,
}

impl ConfluenceConfig {
    /// Validate that set fields are non-empty.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any set field is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (value, field) in [
            (&self.space_key, "confluence.space_key"),
            (&self.space_id, "confluence.space_id"),
            (&self.parent_page_id, "confluence.parent_page_id"),
        ] {
            if let Some(value) = value {
                require_non_empty(value, field)?;
            }
        }
        Ok(())
    }

    /// Returns `true` if a space is configured.
    pub fn has_space(&self) -> bool {
        self.space_key.is_some() || self.space_id.is_some()
    }
}

fn default_issue_type() -> String {
    "Task".to_owned()
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`atlassian.api_token`").
        field: String,
        /// Error message (e.g., "${`ATLASSIAN_API_TOKEN`} not set").
        message: String,
    },
    /// No credential source found.
    #[error(
        "No Atlassian credentials configured. Provide them via:\n  \
         1. Environment variables: ATLASSIAN_EMAIL, ATLASSIAN_API_TOKEN, ATLASSIAN_BASE_URL\n  \
         2. An [atlassian] section in md2adf.toml\n  \
         3. ~/.config/md2adf/credentials.toml with base_url, email and api_token"
    )]
    MissingCredentials,
}

/// Require a string field to be non-empty.
pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
pub(crate) fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `md2adf.toml` in current directory and parents.
    /// Without any file the configuration is empty.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    ///
    /// A project key creates the `[jira]` section when the file has none;
    /// the other settings only apply to an existing section.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(project_key) = &settings.project_key {
            match &mut self.jira {
                Some(jira) => jira.project_key.clone_from(project_key),
                None => self.jira = Some(JiraConfig::new(project_key.clone())),
            }
        }
        if let Some(jira) = &mut self.jira {
            if let Some(epic) = &settings.default_epic {
                jira.default_epic = Some(epic.clone());
            }
            if let Some(issue_type) = &settings.default_issue_type {
                jira.default_issue_type.clone_from(issue_type);
            }
        }

        if settings.confluence_space_key.is_some() || settings.confluence_parent_page_id.is_some() {
            let confluence = self.confluence.get_or_insert_with(ConfluenceConfig::default);
            if let Some(space_key) = &settings.confluence_space_key {
                confluence.space_key = Some(space_key.clone());
                // An explicit key replaces the configured space
                confluence.space_id = None;
            }
            if let Some(parent) = &settings.confluence_parent_page_id {
                confluence.parent_page_id = Some(parent.clone());
            }
        }
    }

    /// Get validated Jira project configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the section is missing or invalid.
    pub fn require_jira(&self) -> Result<&JiraConfig, ConfigError> {
        let jira = self.jira.as_ref().ok_or_else(|| {
            ConfigError::Validation(format!(
                "no Jira project configured: add [jira] project_key to {CONFIG_FILENAME} or pass --project-key"
            ))
        })?;
        jira.validate()?;
        Ok(jira)
    }

    /// Get validated Confluence configuration with a space.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if no space is configured.
    pub fn require_confluence_space(&self) -> Result<&ConfluenceConfig, ConfigError> {
        let confluence = self
            .confluence
            .as_ref()
            .filter(|confluence| confluence.has_space())
            .ok_or_else(|| {
                ConfigError::Validation(format!(
                    "no Confluence space configured: add [confluence] space_key to {CONFIG_FILENAME} or pass --space-key"
                ))
            })?;
        confluence.validate()?;
        Ok(confluence)
    }

    /// Resolve Atlassian credentials.
    ///
    /// Order: `ATLASSIAN_*` environment variables, the `[atlassian]` section,
    /// then `~/.config/md2adf/credentials.toml`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingCredentials` if no source is available,
    /// or a validation/parse error for an incomplete source.
    pub fn resolve_credentials(&self) -> Result<Credentials, ConfigError> {
        let config_path = self
            .config_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
        let project = self
            .atlassian
            .as_ref()
            .map(|section| (section, config_path.as_path()));
        let user_file = credentials::user_credentials_path();

        credentials::resolve(
            |name| std::env::var(name).ok(),
            project,
            user_file.as_deref(),
        )
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                debug!("Discovered config at {}", candidate.display());
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// The `[atlassian]` section is validated when credentials are resolved,
    /// since environment variables may take precedence over it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(jira) = &self.jira {
            jira.validate()?;
        }
        if let Some(confluence) = &self.confluence {
            confluence.validate()?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref mut atlassian) = self.atlassian {
            atlassian.expand_env_vars()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.jira.is_none());
        assert!(config.atlassian.is_none());
    }

    #[test]
    fn test_parse_jira_config() {
        let toml = r#"
[jira]
project_key = "OPS"
board_id = 42
default_epic = "OPS-100"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let jira = config.jira.unwrap();
        assert_eq!(jira.project_key, "OPS");
        assert_eq!(jira.board_id, Some(42));
        assert_eq!(jira.default_issue_type, "Task");
        assert_eq!(jira.default_epic.as_deref(), Some("OPS-100"));
    }

    #[test]
    fn test_parse_atlassian_config() {
        let toml = r#"
[atlassian]
base_url = "https://acme.atlassian.net"
email = "dev@acme.com"
api_token = "token123"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let atlassian = config.atlassian.unwrap();
        assert_eq!(atlassian.base_url, "https://acme.atlassian.net");
        assert_eq!(atlassian.email, "dev@acme.com");
        assert_eq!(atlassian.api_token, "token123");
    }

    #[test]
    fn test_jira_requires_project_key() {
        let toml = r"
[jira]
board_id = 1
";
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_project_key_invalid() {
        let toml = r#"
[jira]
project_key = ""
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("jira.project_key"));
    }

    #[test]
    fn test_require_jira_missing() {
        let config = Config::default();
        let err = config.require_jira().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("--project-key"));
    }

    #[test]
    fn test_apply_cli_settings_creates_jira_section() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings {
            project_key: Some("WEB".to_owned()),
            default_epic: Some("WEB-1".to_owned()),
            ..Default::default()
        });
        let jira = config.require_jira().unwrap();
        assert_eq!(jira.project_key, "WEB");
        assert_eq!(jira.default_epic.as_deref(), Some("WEB-1"));
        assert_eq!(jira.default_issue_type, "Task");
    }

    #[test]
    fn test_apply_cli_settings_overrides_file() {
        let mut config: Config = toml::from_str(
            r#"
[jira]
project_key = "OPS"
default_issue_type = "Bug"
"#,
        )
        .unwrap();
        config.apply_cli_settings(&CliSettings {
            default_issue_type: Some("Story".to_owned()),
            ..Default::default()
        });
        let jira = config.require_jira().unwrap();
        assert_eq!(jira.project_key, "OPS"); // Unchanged
        assert_eq!(jira.default_issue_type, "Story");
    }

    #[test]
    fn test_epic_without_project_is_ignored() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings {
            default_epic: Some("X-1".to_owned()),
            ..Default::default()
        });
        assert!(config.jira.is_none());
    }

    #[test]
    fn test_parse_confluence_config() {
        let config: Config = toml::from_str(
            r#"
[confluence]
space_key = "ENG"
parent_page_id = "42"
"#,
        )
        .unwrap();
        let confluence = config.require_confluence_space().unwrap();
        assert_eq!(confluence.space_key.as_deref(), Some("ENG"));
        assert!(confluence.space_id.is_none());
        assert_eq!(confluence.parent_page_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_require_confluence_space_missing() {
        let config: Config = toml::from_str("[confluence]\nparent_page_id = \"42\"\n").unwrap();
        let err = config.require_confluence_space().unwrap_err();
        assert!(err.to_string().contains("--space-key"));
        assert!(Config::default().require_confluence_space().is_err());
    }

    #[test]
    fn test_empty_confluence_space_key_invalid() {
        let config: Config = toml::from_str("[confluence]\nspace_key = \"\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("confluence.space_key"));
    }

    #[test]
    fn test_apply_cli_settings_confluence() {
        let mut config: Config = toml::from_str(
            r#"
[confluence]
space_id = "98304"
parent_page_id = "1"
"#,
        )
        .unwrap();
        config.apply_cli_settings(&CliSettings {
            confluence_space_key: Some("OPS".to_owned()),
            ..Default::default()
        });
        let confluence = config.require_confluence_space().unwrap();
        assert_eq!(confluence.space_key.as_deref(), Some("OPS"));
        assert!(confluence.space_id.is_none());
        assert_eq!(confluence.parent_page_id.as_deref(), Some("1"));
    }

    #[test]
    fn test_apply_cli_settings_creates_confluence_section() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings {
            confluence_parent_page_id: Some("7".to_owned()),
            ..Default::default()
        });
        let confluence = config.confluence.unwrap();
        assert_eq!(confluence.parent_page_id.as_deref(), Some("7"));
        assert!(!confluence.has_space());
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/md2adf.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file_expands_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"
[jira]
project_key = "OPS"

[atlassian]
base_url = "${MD2ADF_TEST_UNSET_URL:-https://fallback.atlassian.net}"
email = "dev@acme.com"
api_token = "token"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(
            config.atlassian.unwrap().base_url,
            "https://fallback.atlassian.net"
        );
    }

    #[test]
    fn test_load_from_file_unset_env_var() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"
[atlassian]
base_url = "https://acme.atlassian.net"
email = "dev@acme.com"
api_token = "${MD2ADF_TEST_UNSET_TOKEN}"
"#,
        )
        .unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(
            matches!(&err, ConfigError::EnvVar { field, .. } if field == "atlassian.api_token"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_load_validates_cli_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[jira]\nproject_key = \"OPS\"\n").unwrap();

        let settings = CliSettings {
            project_key: Some(String::new()),
            ..Default::default()
        };
        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
