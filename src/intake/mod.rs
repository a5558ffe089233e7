use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// What gets forwarded to the spreadsheet intake webhook for one lead.
/// Field names match the sheet's column mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadPayload {
    pub lead_id: Uuid,
    #[serde(rename = "type")]
    pub lead_type: LeadType,
    pub course: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeadType {
    Registration,
    PreRegistration,
}

#[async_trait]
pub trait IntakeClient: Send + Sync {
    async fn submit(&self, payload: &LeadPayload) -> Result<(), AppError>;
}

/// Posts leads to the configured webhook (a Google-Sheet-backed endpoint in
/// production). Callers treat failures as non-fatal; this client only
/// reports them.
pub struct WebhookIntakeClient {
    client: Client,
    url: String,
}

impl WebhookIntakeClient {
    pub fn new(url: String) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::BadRequest(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl IntakeClient for WebhookIntakeClient {
    async fn submit(&self, payload: &LeadPayload) -> Result<(), AppError> {
        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|_| AppError::InternalServerError)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::BadRequest(format!(
                "Intake webhook error {}: {}",
                status, body
            )));
        }

        Ok(())
    }
}

/// Used when no webhook is configured and in tests.
pub struct NoopIntakeClient;

#[async_trait]
impl IntakeClient for NoopIntakeClient {
    async fn submit(&self, payload: &LeadPayload) -> Result<(), AppError> {
        tracing::debug!("intake disabled, dropping lead {}", payload.lead_id);
        Ok(())
    }
}
