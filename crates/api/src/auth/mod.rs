//! Admin access guard.
//!
//! A single shared secret, carried in the JSON request body, gates
//! every mutating operation plus the stats endpoint. There is no
//! session or token system: each call re-supplies the secret and is
//! checked statelessly against [`ServerConfig::admin_password`].

use folio_core::error::CoreError;
use serde::Deserialize;

use crate::config::ServerConfig;

/// Request body wrapper for admin-guarded operations: the secret
/// travels alongside the payload fields.
#[derive(Debug, Deserialize)]
pub struct Authenticated<T> {
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(flatten)]
    pub body: T,
}

/// Body for admin operations that carry nothing but the secret
/// (delete, stats).
#[derive(Debug, Default, Deserialize)]
pub struct AdminSecret {
    #[serde(default)]
    pub secret: Option<String>,
}

/// Fail-closed secret check.
///
/// Missing or empty secret is Unauthorized; a mismatch (including the
/// case where no secret is configured at all) is Forbidden.
pub fn authorize(config: &ServerConfig, supplied: Option<&str>) -> Result<(), CoreError> {
    let supplied = supplied.unwrap_or("");
    if supplied.is_empty() {
        return Err(CoreError::Unauthorized("Password required".into()));
    }
    if config.admin_password.is_empty() || supplied != config.admin_password {
        return Err(CoreError::Forbidden("Invalid admin password".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_secret(secret: &str) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            cors_origins: vec![],
            request_timeout_secs: 30,
            admin_password: secret.into(),
        }
    }

    #[test]
    fn missing_secret_is_unauthorized() {
        let config = config_with_secret("hunter2");
        assert!(matches!(
            authorize(&config, None),
            Err(CoreError::Unauthorized(_))
        ));
        assert!(matches!(
            authorize(&config, Some("")),
            Err(CoreError::Unauthorized(_))
        ));
    }

    #[test]
    fn wrong_secret_is_forbidden() {
        let config = config_with_secret("hunter2");
        assert!(matches!(
            authorize(&config, Some("hunter3")),
            Err(CoreError::Forbidden(_))
        ));
    }

    #[test]
    fn correct_secret_passes() {
        let config = config_with_secret("hunter2");
        assert!(authorize(&config, Some("hunter2")).is_ok());
    }

    #[test]
    fn unset_secret_rejects_everything() {
        let config = config_with_secret("");
        assert!(matches!(
            authorize(&config, Some("anything")),
            Err(CoreError::Forbidden(_))
        ));
    }
}
