//! Fires the research webhook once and prints the response, or `error`.

use ghosthook::config::WebhookConfig;
use ghosthook::webhook::{self, WebhookOutcome};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = WebhookConfig::from_env();

    // Fire-and-forget: every failure is logged and printed, never fatal.
    let outcome = match webhook::build_client() {
        Ok(client) => webhook::trigger(&client, &config).await,
        Err(e) => {
            tracing::error!(error = %e, "failed to build http client");
            WebhookOutcome::Failed(e.to_string())
        }
    };

    match outcome {
        WebhookOutcome::Delivered(body) => println!("{body}"),
        WebhookOutcome::Failed(_) => println!("error"),
    }
}
