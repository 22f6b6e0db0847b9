// src/analysis/mod.rs
use thiserror::Error;

use crate::api::wire::TenderAnalysisResponse;

/// Lowest and highest recommended bid, in the service's currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// A completed tender analysis as shown by the dashboard.
///
/// Built wholesale from a successful response and replaced wholesale by
/// the next one; it is never updated field by field.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub title: String,
    pub price_range: PriceRange,
    /// Certainty of the price estimate, 0-100.
    pub confidence: f64,
    /// How well a bid would satisfy the tender requirements, 0-100.
    pub compliance: f64,
    /// Requirements in the order the service listed them.
    pub requirements: Vec<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidAnalysis {
    #[error("{field} is not a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must be between 0 and 100, got {value}")]
    PercentOutOfRange { field: &'static str, value: f64 },
    #[error("price range minimum {0} is negative")]
    NegativePrice(f64),
    #[error("price range minimum {min} exceeds maximum {max}")]
    InvertedPriceRange { min: f64, max: f64 },
}

impl TryFrom<TenderAnalysisResponse> for AnalysisResult {
    type Error = InvalidAnalysis;

    fn try_from(response: TenderAnalysisResponse) -> Result<Self, Self::Error> {
        let min = finite("price_range.min", response.price_range.min)?;
        let max = finite("price_range.max", response.price_range.max)?;
        if min < 0.0 {
            return Err(InvalidAnalysis::NegativePrice(min));
        }
        if min > max {
            return Err(InvalidAnalysis::InvertedPriceRange { min, max });
        }

        Ok(Self {
            title: response.title,
            price_range: PriceRange { min, max },
            confidence: percent("confidence", response.confidence)?,
            compliance: percent("compliance", response.compliance)?,
            requirements: response.requirements,
            summary: response
                .analysis_summary
                .filter(|summary| !summary.trim().is_empty()),
        })
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, InvalidAnalysis> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidAnalysis::NotFinite { field })
    }
}

fn percent(field: &'static str, value: f64) -> Result<f64, InvalidAnalysis> {
    let value = finite(field, value)?;
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(InvalidAnalysis::PercentOutOfRange { field, value })
    }
}
