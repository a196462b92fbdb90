use crate::operation::{Operation, Operations};
use crate::styling::Theme;
use crate::ui::UiState;
use bevy::app::AppExit;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
use native_dialog::FileDialog;

pub(super) fn ui(
    theme: &mut Theme,
    ui_context: &mut EguiContexts,
    ui_state: &mut UiState,
    operations: &mut Operations,
    mut exit: EventWriter<AppExit>,
) {
    egui::Window::new("main menu")
        .resizable(false)
        .title_bar(false)
        .fixed_pos([5.0, 5.0])
        .show(ui_context.ctx_mut(), |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("📁 Multi-file Import…").clicked() {
                        operations.push(Operation::OpenImportDialog);
                        ui.close_menu();
                    }

                    #[cfg(not(target_arch = "wasm32"))]
                    if ui.button("💾 Export…").clicked() {
                        match export_path() {
                            Ok(Some(path)) => operations.push(Operation::ExportScene(path)),
                            Ok(None) => {}
                            Err(e) => error!("Failed to pick an export file: {e:?}"),
                        }
                        ui.close_menu();
                    }

                    ui.checkbox(&mut theme.dark_mode, "Dark mode");
                    ui.checkbox(&mut ui_state.messages_open, "Show messages");

                    ui.separator();
                    if ui.button("❌ Clear scene").clicked() {
                        operations.push(Operation::ClearScene)
                    }
                    if ui.button("🚪 Exit").clicked() {
                        exit.send(AppExit::Success);
                    }
                });
            })
        });
}

#[cfg(not(target_arch = "wasm32"))]
fn export_path() -> anyhow::Result<Option<PathBuf>> {
    Ok(FileDialog::new()
        .add_filter("Scene archive", &[mergium_archive::FILE_EXTENSION])
        .show_save_single_file()?)
}
