//! Environment variable expansion for configuration strings.

use std::borrow::Cow;

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a config value.
///
/// Bare `$VAR` syntax is not expanded, so tokens containing a literal `$`
/// load unchanged. `field` is the config path used in error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    // Fast path: no expansion needed
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let reference = &rest[start..=start + len];
        out.push_str(&expand_reference(reference, field)?);
        rest = &rest[start + len + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Expand a single `${...}` reference.
fn expand_reference(reference: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(reference)
        .map(Cow::into_owned)
        .map_err(|err| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", err.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(
            expand_env("https://acme.atlassian.net", "atlassian.base_url").unwrap(),
            "https://acme.atlassian.net"
        );
    }

    #[test]
    fn test_bare_dollar_is_literal() {
        assert_eq!(
            expand_env("tok$en123", "atlassian.api_token").unwrap(),
            "tok$en123"
        );
    }

    #[test]
    fn test_bare_dollar_next_to_reference() {
        assert_eq!(
            expand_env("${MD2ADF_TEST_UNSET_VAR:-abc}$HOME", "atlassian.api_token").unwrap(),
            "abc$HOME"
        );
    }

    #[test]
    fn test_unclosed_reference_is_literal() {
        assert_eq!(
            expand_env("pre${OOPS", "atlassian.email").unwrap(),
            "pre${OOPS"
        );
    }

    #[test]
    fn test_default_used_when_unset() {
        assert_eq!(
            expand_env("${MD2ADF_TEST_UNSET_VAR:-fallback}", "atlassian.email").unwrap(),
            "fallback"
        );
    }

    #[test]
    fn test_unset_var_is_error() {
        let err = expand_env("${MD2ADF_TEST_UNSET_VAR}", "atlassian.api_token").unwrap_err();
        match err {
            ConfigError::EnvVar { field, message } => {
                assert_eq!(field, "atlassian.api_token");
                assert_eq!(message, "${MD2ADF_TEST_UNSET_VAR} not set");
            }
            other => panic!("expected EnvVar error, got {other:?}"),
        }
    }
}
