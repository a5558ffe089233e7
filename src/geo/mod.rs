use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::AppError;
use crate::models::Currency;

#[derive(Debug, Deserialize)]
struct IpapiResponse {
    country_code: Option<String>,
}

#[async_trait]
pub trait GeoClient: Send + Sync {
    /// ISO country code for the given IP, or the server's own egress IP
    /// when none is supplied. `Ok(None)` means the lookup answered but had
    /// no country for the address.
    async fn lookup_country(&self, ip: Option<&str>) -> Result<Option<String>, AppError>;
}

pub struct IpapiGeoClient {
    client: Client,
}

impl IpapiGeoClient {
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::BadRequest(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl GeoClient for IpapiGeoClient {
    async fn lookup_country(&self, ip: Option<&str>) -> Result<Option<String>, AppError> {
        let url = match ip {
            Some(ip) => format!("https://ipapi.co/{}/json/", ip),
            None => "https://ipapi.co/json/".to_string(),
        };

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|_| AppError::InternalServerError)?;

        if !response.status().is_success() {
            return Err(AppError::BadRequest(format!(
                "Geo API error {}",
                response.status()
            )));
        }

        let parsed: IpapiResponse = response
            .json()
            .await
            .map_err(|_| AppError::InternalServerError)?;
        Ok(parsed.country_code)
    }
}

/// Resolves every lookup to no country; callers fall back to USD.
pub struct NoopGeoClient;

#[async_trait]
impl GeoClient for NoopGeoClient {
    async fn lookup_country(&self, _ip: Option<&str>) -> Result<Option<String>, AppError> {
        Ok(None)
    }
}

/// Billing-currency rule: India sees INR, everyone else USD.
pub fn currency_for_country(country_code: Option<&str>) -> Currency {
    match country_code {
        Some("IN") => Currency::Inr,
        _ => Currency::Usd,
    }
}
