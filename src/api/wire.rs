// src/api/wire.rs
use serde::{Deserialize, Serialize};

/// Body of `POST /api/analyze-tender`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRequest {
    pub tender_id: String,
    /// Always sent as `null`; lookup by URL is not offered.
    pub tender_url: Option<String>,
}

impl AnalysisRequest {
    pub fn for_tender(tender_id: impl Into<String>) -> Self {
        Self {
            tender_id: tender_id.into(),
            tender_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WirePriceRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TenderAnalysisResponse {
    pub title: String,
    pub price_range: WirePriceRange,
    pub confidence: f64,
    pub requirements: Vec<String>,
    pub compliance: f64,
    #[serde(default)]
    pub analysis_summary: Option<String>,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub ted_api: Option<String>,
    #[serde(default)]
    pub gemini_api: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn request_sends_null_url() {
        let body = serde_json::to_value(AnalysisRequest::for_tender("T-1001")).unwrap();
        assert_eq!(body, json!({ "tender_id": "T-1001", "tender_url": null }));
    }

    #[test]
    fn decodes_success_body() {
        let body = r#"{"title":"Road Maintenance","price_range":{"min":50000,"max":75000},"confidence":82,"requirements":["ISO 9001"],"compliance":91}"#;
        let response: TenderAnalysisResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.title, "Road Maintenance");
        assert_eq!(response.price_range, WirePriceRange { min: 50000.0, max: 75000.0 });
        assert_eq!(response.confidence, 82.0);
        assert_eq!(response.requirements, vec!["ISO 9001"]);
        assert_eq!(response.compliance, 91.0);
        assert_eq!(response.analysis_summary, None);
    }

    #[test]
    fn missing_field_is_an_error() {
        let body = r#"{"title":"Road Maintenance","confidence":82,"requirements":[],"compliance":91}"#;
        assert!(serde_json::from_str::<TenderAnalysisResponse>(body).is_err());
    }

    #[test]
    fn health_tolerates_partial_bodies() {
        let health: HealthStatus =
            serde_json::from_str(r#"{"status":"unhealthy","service":"Toptimize API","error":"boom"}"#).unwrap();
        assert!(!health.is_healthy());
        assert_eq!(health.error.as_deref(), Some("boom"));
        assert_eq!(health.ted_api, None);
    }
}
