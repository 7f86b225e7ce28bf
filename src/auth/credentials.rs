//! Credential management for Bitget API authentication.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

const KEY_VAR: &str = "BITGET_API_KEY";
const SECRET_VAR: &str = "BITGET_API_SECRET";
const PASSPHRASE_VAR: &str = "BITGET_API_PASSPHRASE";

/// API credentials: the key, the signing secret and the account passphrase.
#[derive(Clone)]
pub struct Credentials {
    /// The API key (public identifier)
    pub api_key: String,
    /// The API secret (private, used for signing)
    api_secret: SecretString,
    /// The passphrase chosen when the key was created
    api_passphrase: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key, secret and passphrase.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        api_passphrase: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
            api_passphrase: SecretString::from(api_passphrase.into()),
        }
    }

    /// Get the API secret for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }

    /// Get the passphrase for the `ACCESS-PASSPHRASE` header.
    pub fn expose_passphrase(&self) -> &str {
        self.api_passphrase.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("api_passphrase", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone, Debug)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        api_passphrase: impl Into<String>,
    ) -> Self {
        Self {
            credentials: Credentials::new(api_key, api_secret, api_passphrase),
        }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl CredentialsProvider for Arc<StaticCredentials> {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads `BITGET_API_KEY`, `BITGET_API_SECRET` and
/// `BITGET_API_PASSPHRASE`.
#[derive(Debug)]
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from the default environment variables.
    ///
    /// # Panics
    ///
    /// Panics if any of the environment variables is not set.
    pub fn from_env() -> Self {
        Self::from_env_vars(KEY_VAR, SECRET_VAR, PASSPHRASE_VAR)
    }

    /// Create credentials from custom environment variable names.
    ///
    /// # Panics
    ///
    /// Panics if any of the environment variables is not set.
    pub fn from_env_vars(key_var: &str, secret_var: &str, passphrase_var: &str) -> Self {
        let read = |var: &str| {
            std::env::var(var).unwrap_or_else(|_| panic!("Environment variable {var} not set"))
        };

        Self {
            credentials: Credentials::new(read(key_var), read(secret_var), read(passphrase_var)),
        }
    }

    /// Try to create credentials from the default environment variables.
    ///
    /// Returns `None` if any of them is not set.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_vars(KEY_VAR, SECRET_VAR, PASSPHRASE_VAR)
    }

    /// Try to create credentials from custom environment variable names.
    pub fn try_from_env_vars(key_var: &str, secret_var: &str, passphrase_var: &str) -> Option<Self> {
        let api_key = std::env::var(key_var).ok()?;
        let api_secret = std::env::var(secret_var).ok()?;
        let api_passphrase = std::env::var(passphrase_var).ok()?;

        Some(Self {
            credentials: Credentials::new(api_key, api_secret, api_passphrase),
        })
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new("my_key", "super_secret", "my_passphrase");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("my_key"));
        assert!(!debug_str.contains("super_secret"));
        assert!(!debug_str.contains("my_passphrase"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_static_credentials() {
        let provider = StaticCredentials::new("key", "secret", "pass");
        let creds = provider.get_credentials();
        assert_eq!(creds.api_key, "key");
        assert_eq!(creds.expose_secret(), "secret");
        assert_eq!(creds.expose_passphrase(), "pass");
    }

    #[test]
    fn test_env_credentials_missing_var() {
        let creds = EnvCredentials::try_from_env_vars(
            "BITGET_TEST_UNSET_KEY",
            "BITGET_TEST_UNSET_SECRET",
            "BITGET_TEST_UNSET_PASSPHRASE",
        );
        assert!(creds.is_none());
    }
}
