// src/api/mod.rs
use thiserror::Error;

use crate::analysis::{AnalysisResult, InvalidAnalysis};

pub mod http;
pub mod wire;
pub mod worker;

// Re-export commonly used types
pub use http::HttpTenderApi;
pub use wire::{AnalysisRequest, HealthStatus};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("could not build HTTP client: {0}")]
    Client(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid analysis: {0}")]
    Invalid(#[from] InvalidAnalysis),
    #[error("request worker exited without a response")]
    WorkerLost,
}

/// The analysis service as seen from the dashboard.
pub trait TenderApi: Send + Sync {
    fn analyze_tender(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ApiError>;
    fn health(&self) -> Result<HealthStatus, ApiError>;
}
