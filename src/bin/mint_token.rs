//! Prints a short-lived Ghost Admin API token, one line on stdout.

use ghosthook::config::AdminKey;
use ghosthook::token::sign::mint_admin_token;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    // stdout carries the token only; all diagnostics go to stderr.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let key = AdminKey::from_env()?;
    let token = mint_admin_token(&key)?;
    println!("{token}");
    Ok(())
}
