//! End-to-end mint path: parse a credential, sign, decode, validate.

use chrono::Utc;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use ghosthook::config::AdminKey;
use ghosthook::error::Result;
use ghosthook::token::sign::mint_admin_token;

const TEST_KEY: &str = "6192c1b88f8f1a9d7c4a23e1:5f1e6b2a9c8d7e4f3a2b1c0d9e8f7a6b5c4d3e2f1a0b9c8d7e6f5a4b3c2d1e0f";

#[derive(Debug, Deserialize)]
struct DecodedClaims {
    aud: String,
    iat: i64,
    exp: i64,
}

fn admin_validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_audience(&["/admin/"]);
    validation
}

#[test]
fn minted_token_satisfies_the_admin_api_contract() -> Result<()> {
    let key: AdminKey = TEST_KEY.parse()?;
    let token = mint_admin_token(&key)?;

    // One compact JWS: header.payload.signature.
    assert_eq!(token.split('.').count(), 3);

    let header = decode_header(&token)?;
    assert_eq!(header.alg, Algorithm::HS256);
    assert_eq!(header.kid.as_deref(), Some("6192c1b88f8f1a9d7c4a23e1"));

    let data = decode::<DecodedClaims>(
        &token,
        &DecodingKey::from_secret(&key.secret),
        &admin_validation(),
    )?;
    assert_eq!(data.claims.aud, "/admin/");
    assert_eq!(data.claims.exp - data.claims.iat, 3600);

    // Issued just now, give or take a little clock skew.
    let now = Utc::now().timestamp();
    assert!((data.claims.iat - now).abs() <= 5);
    Ok(())
}

#[test]
fn each_credential_stamps_its_own_kid() -> Result<()> {
    let first: AdminKey = TEST_KEY.parse()?;
    let second: AdminKey = "7203d2c99a0a2bae8d5b34f2:00ff00ff00ff00ff".parse()?;

    let first_header = decode_header(&mint_admin_token(&first)?)?;
    let second_header = decode_header(&mint_admin_token(&second)?)?;
    assert_eq!(first_header.kid.as_deref(), Some("6192c1b88f8f1a9d7c4a23e1"));
    assert_eq!(second_header.kid.as_deref(), Some("7203d2c99a0a2bae8d5b34f2"));
    Ok(())
}
