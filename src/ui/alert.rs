// src/ui/alert.rs
use eframe::egui;
use crate::state::AppState;

// Modal: the rest of the view is disabled while this is open.
pub fn show_alert(ctx: &egui::Context, state: &mut AppState) {
    let message = match &state.alert {
        Some(message) => message.clone(),
        None => return,
    };

    egui::Window::new("Analysis Failed")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(&message);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                state.dismiss_alert();
            }
        });
}
