// src/ui/tender_input.rs
use eframe::egui;
use crate::state::AppState;

/// Draws the tender id field and trigger. Returns `true` when the user
/// asked for an analysis and the trigger was enabled.
pub fn show_tender_input(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    let mut activated = false;

    ui.group(|ui| {
        ui.heading("Analyze Tender");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label("Tender ID:");
            let response = ui.add_enabled(
                !state.loading,
                egui::TextEdit::singleline(&mut state.tender_id)
                    .desired_width(240.0)
                    .hint_text("e.g. 12345-2024"),
            );
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            let label = if state.loading { "Analyzing..." } else { "Analyze Tender" };
            let clicked = ui
                .add_enabled(state.can_analyze(), egui::Button::new(label))
                .clicked();

            if state.loading {
                ui.add(egui::Spinner::new());
            }

            activated = (clicked || submitted) && state.can_analyze();
        });
    });

    activated
}
