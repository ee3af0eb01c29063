//! Claim set for Ghost Admin API tokens.
//! Used by: token::sign.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Audience the Ghost Admin API expects on every token.
pub const ADMIN_AUDIENCE: &str = "/admin/";

/// Tokens are valid for 60 minutes from issuance.
pub const TOKEN_TTL_SECONDS: i64 = 3600;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(ttl_seconds: i64) -> Self {
        let iat = Utc::now().timestamp();
        Self {
            aud: ADMIN_AUDIENCE.into(),
            iat,
            exp: iat + ttl_seconds,
        }
    }
}
