//! Atlassian credential resolution.
//!
//! Credentials are looked up in three places, first complete source wins:
//!
//! 1. `ATLASSIAN_EMAIL`, `ATLASSIAN_API_TOKEN` and `ATLASSIAN_BASE_URL`
//! 2. the `[atlassian]` section of `md2adf.toml`
//! 3. the user credentials file `~/.config/md2adf/credentials.toml`

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::{ConfigError, expand, require_http_url, require_non_empty};

/// Environment variable holding the account email.
pub const EMAIL_VAR: &str = "ATLASSIAN_EMAIL";
/// Environment variable holding the API token.
pub const API_TOKEN_VAR: &str = "ATLASSIAN_API_TOKEN";
/// Environment variable holding the site URL.
pub const BASE_URL_VAR: &str = "ATLASSIAN_BASE_URL";

/// Location of the user credentials file.
const USER_CREDENTIALS_PATH: &str = "~/.config/md2adf/credentials.toml";

/// `[atlassian]` section, also the shape of the user credentials file.
///
/// Missing keys deserialize as empty and are reported by validation.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct AtlassianConfig {
    /// Site URL, e.g. `https://acme.atlassian.net`.
    pub base_url: String,
    /// Account email.
    pub email: String,
    /// API token from id.atlassian.com.
    pub api_token: String,
}

impl fmt::Debug for AtlassianConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtlassianConfig")
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .field("api_token", &"<redacted>")
            .finish()
    }
}

impl AtlassianConfig {
    /// Validate that all fields are set and the URL is http(s).
    ///
    /// `section` prefixes field names in error messages.
    pub(crate) fn validate(&self, section: &str) -> Result<(), ConfigError> {
        require_non_empty(&self.base_url, &format!("{section}.base_url"))?;
        require_http_url(&self.base_url, &format!("{section}.base_url"))?;
        require_non_empty(&self.email, &format!("{section}.email"))?;
        require_non_empty(&self.api_token, &format!("{section}.api_token"))?;
        Ok(())
    }

    /// Expand `${VAR}` references in all fields.
    pub(crate) fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.base_url = expand::expand_env(&self.base_url, "atlassian.base_url")?;
        self.email = expand::expand_env(&self.email, "atlassian.email")?;
        self.api_token = expand::expand_env(&self.api_token, "atlassian.api_token")?;
        Ok(())
    }
}

/// Where resolved credentials came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// `ATLASSIAN_*` environment variables.
    Environment,
    /// `[atlassian]` section of the project config.
    ProjectConfig(PathBuf),
    /// User credentials file.
    UserFile(PathBuf),
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Environment => f.write_str("environment variables"),
            Self::ProjectConfig(path) | Self::UserFile(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolved Atlassian credentials.
#[derive(Clone)]
pub struct Credentials {
    /// Site URL without trailing slash.
    pub base_url: String,
    /// Account email.
    pub email: String,
    /// API token.
    pub api_token: String,
    /// Where the credentials were found.
    pub source: CredentialSource,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .field("api_token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

impl Credentials {
    fn new(config: AtlassianConfig, source: CredentialSource) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            email: config.email,
            api_token: config.api_token,
            source,
        }
    }
}

/// Default user credentials file, if the home directory is known.
pub(crate) fn user_credentials_path() -> Option<PathBuf> {
    let expanded = shellexpand::tilde(USER_CREDENTIALS_PATH);
    if expanded.starts_with('~') {
        return None;
    }
    Some(PathBuf::from(expanded.as_ref()))
}

/// Resolve credentials from the three tiers.
///
/// `env` looks up environment variables; `project` is the `[atlassian]`
/// section with the path of the file it came from.
pub(crate) fn resolve(
    env: impl Fn(&str) -> Option<String>,
    project: Option<(&AtlassianConfig, &Path)>,
    user_file: Option<&Path>,
) -> Result<Credentials, ConfigError> {
    if let Some(config) = from_env(&env) {
        require_http_url(&config.base_url, BASE_URL_VAR)?;
        debug!("Using Atlassian credentials from environment");
        return Ok(Credentials::new(config, CredentialSource::Environment));
    }

    if let Some((config, path)) = project {
        config.validate("atlassian")?;
        debug!("Using Atlassian credentials from {}", path.display());
        return Ok(Credentials::new(
            config.clone(),
            CredentialSource::ProjectConfig(path.to_path_buf()),
        ));
    }

    if let Some(path) = user_file.filter(|path| path.exists()) {
        let content = std::fs::read_to_string(path)?;
        let config: AtlassianConfig = toml::from_str(&content)?;
        config.validate(&path.display().to_string())?;
        debug!("Using Atlassian credentials from {}", path.display());
        return Ok(Credentials::new(
            config,
            CredentialSource::UserFile(path.to_path_buf()),
        ));
    }

    Err(ConfigError::MissingCredentials)
}

/// All three environment variables, when set and non-empty.
fn from_env(env: &impl Fn(&str) -> Option<String>) -> Option<AtlassianConfig> {
    let var = |name: &str| env(name).filter(|value| !value.is_empty());
    Some(AtlassianConfig {
        base_url: var(BASE_URL_VAR)?,
        email: var(EMAIL_VAR)?,
        api_token: var(API_TOKEN_VAR)?,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use pretty_assertions::assert_eq;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    fn full_env() -> impl Fn(&str) -> Option<String> {
        env_from(&[
            (EMAIL_VAR, "env@example.com"),
            (API_TOKEN_VAR, "env-token"),
            (BASE_URL_VAR, "https://env.atlassian.net/"),
        ])
    }

    fn project_config() -> AtlassianConfig {
        AtlassianConfig {
            base_url: "https://project.atlassian.net".to_owned(),
            email: "project@example.com".to_owned(),
            api_token: "project-token".to_owned(),
        }
    }

    #[test]
    fn test_env_wins() {
        let project = project_config();
        let creds = resolve(
            full_env(),
            Some((&project, Path::new("/p/md2adf.toml"))),
            None,
        )
        .unwrap();
        assert_eq!(creds.source, CredentialSource::Environment);
        assert_eq!(creds.email, "env@example.com");
        assert_eq!(creds.base_url, "https://env.atlassian.net");
    }

    #[test]
    fn test_partial_env_falls_through() {
        let env = env_from(&[(EMAIL_VAR, "env@example.com"), (API_TOKEN_VAR, "")]);
        let project = project_config();
        let creds = resolve(env, Some((&project, Path::new("/p/md2adf.toml"))), None).unwrap();
        assert_eq!(
            creds.source,
            CredentialSource::ProjectConfig(PathBuf::from("/p/md2adf.toml"))
        );
        assert_eq!(creds.api_token, "project-token");
    }

    #[test]
    fn test_invalid_project_section() {
        let mut project = project_config();
        project.base_url = "acme.atlassian.net".to_owned();
        let err = resolve(
            env_from(&[]),
            Some((&project, Path::new("/p/md2adf.toml"))),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("atlassian.base_url"));
    }

    #[test]
    fn test_user_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.toml");
        std::fs::write(
            &path,
            r#"
base_url = "https://user.atlassian.net"
email = "user@example.com"
api_token = "user-token"
"#,
        )
        .unwrap();

        let creds = resolve(env_from(&[]), None, Some(&path)).unwrap();
        assert_eq!(creds.source, CredentialSource::UserFile(path.clone()));
        assert_eq!(creds.email, "user@example.com");
        assert_eq!(creds.source.to_string(), path.display().to_string());
    }

    #[test]
    fn test_user_file_missing_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.toml");
        std::fs::write(&path, "email = \"user@example.com\"\n").unwrap();

        let err = resolve(env_from(&[]), None, Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("base_url cannot be empty"));
    }

    #[test]
    fn test_env_base_url_must_be_http() {
        let env = env_from(&[
            (EMAIL_VAR, "env@example.com"),
            (API_TOKEN_VAR, "env-token"),
            (BASE_URL_VAR, "acme.atlassian.net"),
        ]);
        let err = resolve(env, None, None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains(BASE_URL_VAR));
    }

    #[test]
    fn test_nothing_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = resolve(env_from(&[]), None, Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredentials));
        assert!(err.to_string().contains(API_TOKEN_VAR));
    }

    #[test]
    fn test_debug_redacts_token() {
        let creds = resolve(full_env(), None, None).unwrap();
        let debug = format!("{creds:?}");
        assert!(!debug.contains("env-token"));
        assert!(debug.contains("<redacted>"));
    }
}
