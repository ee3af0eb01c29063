//! Environment-driven configuration for both utilities.
//! Used by: mint_token and trigger_webhook binaries.

use std::str::FromStr;

use crate::error::{Error, Result};

pub const ADMIN_KEY_VAR: &str = "GHOST_ADMIN_KEY";
pub const WEBHOOK_URL_VAR: &str = "WEBHOOK_URL";
pub const COMPANY_VAR: &str = "COMPANY";

pub const DEFAULT_WEBHOOK_URL: &str = "https://example.app.n8n.cloud/webhook/sec-filings";
pub const DEFAULT_COMPANY: &str = "nvda";

/// Ghost Admin API credential, configured as `<id>:<hex-secret>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminKey {
    pub id: String,
    pub secret: Vec<u8>,
}

impl AdminKey {
    pub fn from_env() -> Result<Self> {
        let raw = std::env::var(ADMIN_KEY_VAR).map_err(|_| Error::MissingAdminKey)?;
        raw.parse()
    }
}

impl FromStr for AdminKey {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        // Split on the first ':' only; the secret half must be pure hex.
        let (id, secret_hex) = raw
            .split_once(':')
            .ok_or_else(|| Error::MalformedAdminKey("missing ':' separator".into()))?;

        if id.is_empty() {
            return Err(Error::MalformedAdminKey("empty key id".into()));
        }
        if secret_hex.is_empty() {
            return Err(Error::MalformedAdminKey("empty secret".into()));
        }

        let secret = hex::decode(secret_hex)?;
        Ok(Self { id: id.to_owned(), secret })
    }
}

/// Target and tenant for the webhook call. Resolution never fails; absent
/// variables fall back to the fixed defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    pub url: String,
    pub company: String,
}

impl WebhookConfig {
    pub fn from_env() -> Self {
        Self {
            url: std::env::var(WEBHOOK_URL_VAR).unwrap_or_else(|_| DEFAULT_WEBHOOK_URL.into()),
            company: std::env::var(COMPANY_VAR).unwrap_or_else(|_| DEFAULT_COMPANY.into()),
        }
    }
}
