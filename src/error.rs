//! Unified error types for GhostHook.
//! Used by: config, token, webhook.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing GHOST_ADMIN_KEY in environment")]
    MissingAdminKey,

    #[error("malformed admin key: {0}")]
    MalformedAdminKey(String),

    #[error("admin key secret is not valid hex: {0}")]
    SecretDecode(#[from] hex::FromHexError),

    #[error("token signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error("invalid webhook url: {0}")]
    InvalidWebhookUrl(#[from] url::ParseError),

    #[error("webhook request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
