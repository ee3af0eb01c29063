//! One-shot webhook delivery for the research pipeline.
//! Used by: trigger_webhook binary.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::config::WebhookConfig;
use crate::error::Result;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WebhookRequest {
    pub input: String,
    pub company: String,
}

impl WebhookRequest {
    pub fn for_company(company: &str) -> Self {
        Self {
            input: format!(
                "What is {company}'s business overview according to the latest SEC 10-K filing?"
            ),
            company: company.to_owned(),
        }
    }
}

/// Outcome of a single delivery attempt. Failures are carried as data, not
/// propagated; the invoker is fire-and-forget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookOutcome {
    Delivered(Value),
    Failed(String),
}

impl WebhookOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered(_))
    }
}

pub fn build_client() -> Result<Client> {
    client_with_timeout(REQUEST_TIMEOUT)
}

pub fn client_with_timeout(timeout: Duration) -> Result<Client> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// Sends one POST to the configured webhook. Every failure mode, from a
/// malformed target URL through network errors, timeouts, and non-success
/// statuses, is logged and returned as [`WebhookOutcome::Failed`].
pub async fn trigger(client: &Client, config: &WebhookConfig) -> WebhookOutcome {
    let url = match Url::parse(&config.url) {
        Ok(url) => url,
        Err(e) => {
            tracing::error!(url = %config.url, error = %e, "invalid webhook url");
            return WebhookOutcome::Failed(e.to_string());
        }
    };

    let request = WebhookRequest::for_company(&config.company);
    match deliver(client, url, &request).await {
        Ok(body) => {
            tracing::info!(response = %body, "webhook response");
            WebhookOutcome::Delivered(body)
        }
        Err(e) => {
            tracing::error!(error = %e, "webhook delivery failed");
            WebhookOutcome::Failed(e.to_string())
        }
    }
}

async fn deliver(client: &Client, url: Url, request: &WebhookRequest) -> Result<Value> {
    let response = client
        .post(url)
        .json(request)
        .send()
        .await?
        .error_for_status()?;
    let text = response.text().await?;

    // n8n responds with JSON; anything else is carried through as raw text.
    let body = match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(_) => Value::String(text),
    };
    Ok(body)
}
