// src/ui/results.rs
use eframe::egui;

use crate::analysis::AnalysisResult;
use crate::utils::{format_percent, format_price_range};

/// Marker drawn in front of every requirement.
pub const REQUIREMENT_MARKER: &str = "✓";

/// Display-ready text for the three result panels.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub title: String,
    pub price_range: String,
    pub confidence: String,
    pub compliance: String,
    pub compliance_level: ComplianceLevel,
    pub requirements: Vec<(&'static str, String)>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComplianceLevel {
    High,
    Medium,
    Low,
}

impl ComplianceLevel {
    fn from_score(score: f64) -> Self {
        if score > 90.0 {
            Self::High
        } else if score > 70.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    fn color(self) -> egui::Color32 {
        match self {
            Self::High => egui::Color32::GREEN,
            Self::Medium => egui::Color32::YELLOW,
            Self::Low => egui::Color32::RED,
        }
    }
}

impl ResultView {
    pub fn from_result(result: &AnalysisResult, currency_symbol: &str) -> Self {
        Self {
            title: result.title.clone(),
            price_range: format_price_range(currency_symbol, &result.price_range),
            confidence: format!("{} confidence", format_percent(result.confidence)),
            compliance: format_percent(result.compliance),
            compliance_level: ComplianceLevel::from_score(result.compliance),
            requirements: result
                .requirements
                .iter()
                .map(|requirement| (REQUIREMENT_MARKER, requirement.clone()))
                .collect(),
            summary: result.summary.clone(),
        }
    }
}

/// Nothing is drawn until an analysis has completed.
pub fn show_results(ui: &mut egui::Ui, result: Option<&AnalysisResult>, currency_symbol: &str) {
    let Some(result) = result else {
        return;
    };
    let view = ResultView::from_result(result, currency_symbol);

    ui.heading(&view.title);
    ui.add_space(8.0);

    ui.columns(3, |columns| {
        // Price panel
        columns[0].group(|ui| {
            ui.set_min_height(120.0);
            ui.vertical(|ui| {
                ui.heading("Optimal Price Range");
                ui.add_space(8.0);
                ui.label(egui::RichText::new(&view.price_range).size(20.0).strong());
                ui.label(&view.confidence);
            });
        });

        // Compliance panel
        columns[1].group(|ui| {
            ui.set_min_height(120.0);
            ui.vertical(|ui| {
                ui.heading("Compliance Score");
                ui.add_space(8.0);
                ui.colored_label(
                    view.compliance_level.color(),
                    egui::RichText::new(&view.compliance).size(20.0).strong(),
                );
            });
        });

        // Requirements panel
        columns[2].group(|ui| {
            ui.set_min_height(120.0);
            ui.vertical(|ui| {
                ui.heading("Key Requirements");
                ui.add_space(8.0);
                if view.requirements.is_empty() {
                    ui.label("No requirements listed");
                }
                for (marker, requirement) in &view.requirements {
                    ui.horizontal_wrapped(|ui| {
                        ui.colored_label(egui::Color32::GREEN, *marker);
                        ui.label(requirement);
                    });
                }
            });
        });
    });

    if let Some(summary) = &view.summary {
        ui.add_space(16.0);
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.heading("Analysis Summary");
            ui.add_space(4.0);
            ui.label(summary);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::PriceRange;
    use pretty_assertions::assert_eq;

    fn road_maintenance() -> AnalysisResult {
        AnalysisResult {
            title: "Road Maintenance".to_string(),
            price_range: PriceRange { min: 50000.0, max: 75000.0 },
            confidence: 82.0,
            compliance: 91.0,
            requirements: vec!["ISO 9001".to_string()],
            summary: None,
        }
    }

    #[test]
    fn renders_road_maintenance_scenario() {
        let view = ResultView::from_result(&road_maintenance(), "€");

        assert_eq!(
            view,
            ResultView {
                title: "Road Maintenance".to_string(),
                price_range: "€50,000 – €75,000".to_string(),
                confidence: "82% confidence".to_string(),
                compliance: "91%".to_string(),
                compliance_level: ComplianceLevel::High,
                requirements: vec![("✓", "ISO 9001".to_string())],
                summary: None,
            }
        );
    }

    #[test]
    fn requirements_keep_received_order() {
        let mut result = road_maintenance();
        result.requirements = vec![
            "ISO 9001 certification".to_string(),
            "Min. 3 years experience".to_string(),
            "EU presence required".to_string(),
        ];

        let rendered: Vec<String> = ResultView::from_result(&result, "€")
            .requirements
            .into_iter()
            .map(|(_, text)| text)
            .collect();
        assert_eq!(rendered, result.requirements);
    }

    #[test]
    fn rendering_is_repeatable() {
        let result = road_maintenance();
        assert_eq!(
            ResultView::from_result(&result, "€"),
            ResultView::from_result(&result, "€")
        );
    }

    #[test]
    fn compliance_bands() {
        assert_eq!(ComplianceLevel::from_score(91.0), ComplianceLevel::High);
        assert_eq!(ComplianceLevel::from_score(90.0), ComplianceLevel::Medium);
        assert_eq!(ComplianceLevel::from_score(75.0), ComplianceLevel::Medium);
        assert_eq!(ComplianceLevel::from_score(70.0), ComplianceLevel::Low);
    }
}
