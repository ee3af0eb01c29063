//! HS256 token signing for the Ghost Admin API.
//! Used by: mint_token binary.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::config::AdminKey;
use crate::error::Result;
use crate::token::claims::{Claims, TOKEN_TTL_SECONDS};

pub fn mint_admin_token(key: &AdminKey) -> Result<String> {
    let claims = Claims::new(TOKEN_TTL_SECONDS);
    let mut header = Header::new(Algorithm::HS256);
    header.kid = Some(key.id.clone());
    let token = encode(&header, &claims, &EncodingKey::from_secret(&key.secret))?;
    Ok(token)
}
