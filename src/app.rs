// src/app.rs
use std::sync::Arc;
use std::time::Duration;

use eframe::egui;

use crate::api::TenderApi;
use crate::config::Settings;
use crate::state::{AppState, HealthState};
use crate::ui::{alert, results, tender_input};

pub struct TenderApp {
    state: AppState,
    api: Arc<dyn TenderApi>,
    settings: Settings,
}

impl TenderApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, api: Arc<dyn TenderApi>) -> Self {
        let mut app = Self {
            state: AppState::new(),
            api,
            settings,
        };
        app.check_api(&cc.egui_ctx);
        app
    }

    fn check_api(&mut self, ctx: &egui::Context) {
        let ctx = ctx.clone();
        self.state
            .start_health_check(Arc::clone(&self.api), move || ctx.request_repaint());
    }

    fn analyze(&mut self, ctx: &egui::Context) {
        let ctx = ctx.clone();
        self.state
            .start_analysis(Arc::clone(&self.api), move || ctx.request_repaint());
    }

    fn show_header(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            ui.heading("Toptimize");
            ui.separator();

            match &self.state.last_analyzed {
                Some(at) => ui.label(format!("Last Analysis: {}", at.format("%Y-%m-%d %H:%M:%S"))),
                None => ui.label("No analyses run yet"),
            };

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let checking = self.state.health == HealthState::Checking;
                if ui.add_enabled(!checking, egui::Button::new("Check API")).clicked() {
                    self.check_api(ctx);
                }

                match &self.state.health {
                    HealthState::Unknown => {
                        ui.label("API: unknown");
                    }
                    HealthState::Checking => {
                        ui.add(egui::Spinner::new());
                    }
                    HealthState::Online(status) if status.is_healthy() => {
                        ui.colored_label(egui::Color32::GREEN, "API: online")
                            .on_hover_text(format!(
                                "{}\nTED: {}\nGemini: {}",
                                status.service.as_deref().unwrap_or("Analysis service"),
                                status.ted_api.as_deref().unwrap_or("n/a"),
                                status.gemini_api.as_deref().unwrap_or("n/a")
                            ));
                    }
                    HealthState::Online(status) => {
                        ui.colored_label(egui::Color32::YELLOW, "API: degraded")
                            .on_hover_text(status.error.as_deref().unwrap_or("No details"));
                    }
                    HealthState::Offline => {
                        ui.colored_label(egui::Color32::RED, "API: offline");
                    }
                }
            });
        });
    }
}

impl eframe::App for TenderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();

        // A worker that dies never calls back, so keep polling while busy.
        if self.state.loading || self.state.health == HealthState::Checking {
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_header(ui, ctx);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let enabled = self.state.alert.is_none();
            ui.add_enabled_ui(enabled, |ui| {
                if tender_input::show_tender_input(ui, &mut self.state) {
                    self.analyze(ctx);
                }

                ui.add_space(16.0);

                egui::ScrollArea::vertical().show(ui, |ui| {
                    results::show_results(
                        ui,
                        self.state.result.as_ref(),
                        &self.settings.currency_symbol,
                    );
                });
            });
        });

        alert::show_alert(ctx, &mut self.state);
    }
}
