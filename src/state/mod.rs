// src/state/mod.rs
use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::analysis::AnalysisResult;
use crate::api::worker::{self, Pending, Poll};
use crate::api::{AnalysisRequest, ApiError, HealthStatus, TenderApi};

/// Shown for every failed analysis; details only go to the log.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Analysis failed. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum HealthState {
    Unknown,
    Checking,
    Online(HealthStatus),
    Offline,
}

// Core application state
#[derive(Debug)]
pub struct AppState {
    // Input & trigger
    pub tender_id: String,
    pub loading: bool,

    // Latest completed analysis
    pub result: Option<AnalysisResult>,
    pub last_analyzed: Option<DateTime<Local>>,

    pub alert: Option<String>,
    pub health: HealthState,

    pending: Option<Pending<AnalysisResult>>,
    pending_health: Option<Pending<HealthStatus>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            tender_id: String::new(),
            loading: false,
            result: None,
            last_analyzed: None,
            alert: None,
            health: HealthState::Unknown,
            pending: None,
            pending_health: None,
        }
    }

    pub fn can_analyze(&self) -> bool {
        !self.tender_id.is_empty() && !self.loading
    }

    /// Sends one analysis request for the current tender id. Returns
    /// `false` without touching the network when the trigger is disabled.
    pub fn start_analysis(
        &mut self,
        api: Arc<dyn TenderApi>,
        notify: impl Fn() + Send + 'static,
    ) -> bool {
        if !self.can_analyze() {
            return false;
        }

        let request = AnalysisRequest::for_tender(self.tender_id.clone());
        log::info!("Analyzing tender {}", request.tender_id);

        self.loading = true;
        self.pending = Some(worker::spawn(
            "tender-analysis",
            move || api.analyze_tender(&request),
            notify,
        ));
        true
    }

    pub fn start_health_check(
        &mut self,
        api: Arc<dyn TenderApi>,
        notify: impl Fn() + Send + 'static,
    ) {
        if self.pending_health.is_some() {
            return;
        }
        self.health = HealthState::Checking;
        self.pending_health = Some(worker::spawn("api-health", move || api.health(), notify));
    }

    /// Applies any finished background work. Returns `true` if state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;

        if let Some(pending) = &self.pending {
            if let Poll::Ready(outcome) = pending.poll() {
                self.pending = None;
                self.finish_analysis(outcome);
                changed = true;
            }
        }

        if let Some(pending) = &self.pending_health {
            if let Poll::Ready(outcome) = pending.poll() {
                self.pending_health = None;
                self.finish_health_check(outcome);
                changed = true;
            }
        }

        changed
    }

    pub fn finish_analysis(&mut self, outcome: Result<AnalysisResult, ApiError>) {
        self.loading = false;

        match outcome {
            Ok(result) => {
                log::debug!(
                    "Analysis for {} complete: {} requirements",
                    self.tender_id,
                    result.requirements.len()
                );
                self.result = Some(result);
                self.last_analyzed = Some(Local::now());
            }
            Err(e) => {
                log::error!("Analysis error: {}", e);
                self.alert = Some(ANALYSIS_FAILED_MESSAGE.to_string());
            }
        }
    }

    fn finish_health_check(&mut self, outcome: Result<HealthStatus, ApiError>) {
        self.health = match outcome {
            Ok(status) => HealthState::Online(status),
            Err(e) => {
                log::warn!("Health check failed: {}", e);
                HealthState::Offline
            }
        };
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
