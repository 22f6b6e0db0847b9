// src/api/http.rs
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;

use super::{AnalysisRequest, ApiError, HealthStatus, TenderApi};
use crate::analysis::AnalysisResult;
use crate::api::wire::TenderAnalysisResponse;
use crate::config::Settings;

#[derive(Debug, Clone)]
pub struct HttpTenderApi {
    client: Client,
    analyze_url: String,
    health_url: String,
}

impl HttpTenderApi {
    pub fn new(settings: &Settings) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(settings.request_timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            client,
            analyze_url: settings.analyze_url(),
            health_url: settings.health_url(),
        })
    }
}

impl TenderApi for HttpTenderApi {
    fn analyze_tender(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ApiError> {
        let response = self.client.post(&self.analyze_url).json(request).send()?;
        let body: TenderAnalysisResponse = decode(response)?;
        Ok(AnalysisResult::try_from(body)?)
    }

    fn health(&self) -> Result<HealthStatus, ApiError> {
        let response = self.client.get(&self.health_url).send()?;
        decode(response)
    }
}

// Non-2xx fails before the body is looked at.
fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    let bytes = response.bytes()?;
    Ok(serde_json::from_slice(&bytes)?)
}
