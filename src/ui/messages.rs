use crate::import::{ReportLevel, ReportLog};
use crate::ui::UiState;
use bevy_egui::{
    egui::{self, Color32},
    EguiContexts,
};

pub(super) fn ui(ui_context: &mut EguiContexts, ui_state: &mut UiState, reports: &mut ReportLog) {
    if !ui_state.messages_open {
        return;
    }

    egui::Window::new("Messages")
        .anchor(egui::Align2::LEFT_BOTTOM, [5.0, -5.0])
        .resizable(false)
        .default_width(400.0)
        .show(ui_context.ctx_mut(), |ui| {
            egui::ScrollArea::vertical()
                .max_height(150.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for report in reports.iter() {
                        ui.colored_label(level_color(report.level), &report.message);
                    }
                });

            if ui
                .add_enabled(!reports.is_empty(), egui::Button::new("Clear"))
                .clicked()
            {
                reports.clear();
            }
        });
}

fn level_color(level: ReportLevel) -> Color32 {
    match level {
        ReportLevel::Info => Color32::LIGHT_GRAY,
        ReportLevel::Warning => Color32::GOLD,
        ReportLevel::Error => Color32::LIGHT_RED,
    }
}
