//! Gateway Configuration
//!
//! Secret key and base URL, read once when a client is built.

use std::fmt;

use crate::error::{GatewayError, Result};

/// Environment variable holding the secret key
pub const SECRET_KEY_VAR: &str = "PAYSTACK_SECRET_KEY";

/// Environment variable holding the gateway base URL
pub const PAYMENT_URL_VAR: &str = "PAYSTACK_PAYMENT_URL";

/// Config provider collaborator
pub trait ConfigProvider {
    fn secret_key(&self) -> Option<String>;
    fn payment_url(&self) -> Option<String>;
}

/// Reads configuration from the process environment
///
/// A `.env` file in the working directory is loaded first, if present.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvConfig;

impl EnvConfig {
    pub fn new() -> Self {
        dotenvy::dotenv().ok();
        Self
    }
}

impl ConfigProvider for EnvConfig {
    fn secret_key(&self) -> Option<String> {
        std::env::var(SECRET_KEY_VAR).ok()
    }

    fn payment_url(&self) -> Option<String> {
        std::env::var(PAYMENT_URL_VAR).ok()
    }
}

/// Literal configuration values
#[derive(Clone)]
pub struct StaticConfig {
    pub secret_key: String,
    pub payment_url: String,
}

impl StaticConfig {
    pub fn new(secret_key: impl Into<String>, payment_url: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            payment_url: payment_url.into(),
        }
    }
}

impl fmt::Debug for StaticConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticConfig")
            .field("secret_key", &"[REDACTED]")
            .field("payment_url", &self.payment_url)
            .finish()
    }
}

impl ConfigProvider for StaticConfig {
    fn secret_key(&self) -> Option<String> {
        Some(self.secret_key.clone())
    }

    fn payment_url(&self) -> Option<String> {
        Some(self.payment_url.clone())
    }
}

/// API secret key; never printed
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for building the `Authorization` header
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}

/// Validated credentials
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    secret_key: SecretKey,
    payment_url: String,
}

impl GatewayConfig {
    /// Validate raw values
    ///
    /// Fails when either value is blank. A trailing `/` on the URL is
    /// dropped so endpoint paths can be appended directly.
    pub fn new(secret_key: impl Into<String>, payment_url: impl Into<String>) -> Result<Self> {
        let secret_key = secret_key.into().trim().to_owned();
        let payment_url = payment_url.into().trim().trim_end_matches('/').to_owned();

        if secret_key.is_empty() {
            return Err(GatewayError::Config(format!("{SECRET_KEY_VAR} not set")));
        }
        if payment_url.is_empty() {
            return Err(GatewayError::Config(format!("{PAYMENT_URL_VAR} not set")));
        }

        Ok(Self {
            secret_key: SecretKey::new(secret_key),
            payment_url,
        })
    }

    pub fn from_provider(provider: &impl ConfigProvider) -> Result<Self> {
        let secret_key = provider
            .secret_key()
            .ok_or_else(|| GatewayError::Config(format!("{SECRET_KEY_VAR} not set")))?;
        let payment_url = provider
            .payment_url()
            .ok_or_else(|| GatewayError::Config(format!("{PAYMENT_URL_VAR} not set")))?;

        Self::new(secret_key, payment_url)
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_provider(&EnvConfig::new())
    }

    pub const fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Base URL without a trailing slash
    pub fn payment_url(&self) -> &str {
        &self.payment_url
    }
}
