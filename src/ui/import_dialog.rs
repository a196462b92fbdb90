use crate::import::ImportQueue;
use crate::operation::{Operation, Operations};
use crate::ui::UiState;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
use native_dialog::FileDialog;

/// The review dialog at the heart of the multi-file import workflow: lists
/// the pending files with per-row removal, adds more through the OS
/// multi-select picker, and triggers the batch run.
pub(super) fn ui(
    ui_context: &mut EguiContexts,
    ui_state: &mut UiState,
    queue: &ImportQueue,
    operations: &mut Operations,
) {
    let mut open = ui_state.import_dialog_open;
    let mut close_requested = false;

    egui::Window::new("Multi-file Import")
        .open(&mut open)
        .resizable(false)
        .default_width(400.0)
        .show(ui_context.ctx_mut(), |ui| {
            ui.label(format!("Selected archive files: {}", queue.len()));

            egui::ScrollArea::vertical()
                .max_height(200.0)
                .show(ui, |ui| {
                    for (index, entry) in queue.entries().iter().enumerate() {
                        ui.horizontal(|ui| {
                            ui.label(entry.file_name())
                                .on_hover_text(entry.path.display().to_string());
                            if ui.button("❌").clicked() {
                                operations.push(Operation::UnqueueArchiveFile(index));
                            }
                        });
                    }
                });

            #[cfg(not(target_arch = "wasm32"))]
            if ui.button("Add archive files…").clicked() {
                match pick_archive_files() {
                    Ok(files) if files.is_empty() => {}
                    Ok(files) => {
                        let base_dir =
                            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                        operations.push(Operation::QueueArchiveFiles { base_dir, files });
                    }
                    Err(e) => error!("Failed to pick archive files: {e:?}"),
                }
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Import").clicked() {
                    operations.push(Operation::ImportQueuedArchives);
                    close_requested = true;
                }
                if ui.button("Cancel").clicked() {
                    close_requested = true;
                }
            });
        });

    ui_state.import_dialog_open = open && !close_requested;
}

#[cfg(not(target_arch = "wasm32"))]
fn pick_archive_files() -> anyhow::Result<Vec<PathBuf>> {
    Ok(FileDialog::new()
        .add_filter("Scene archive", &[mergium_archive::FILE_EXTENSION])
        .show_open_multiple_file()?)
}
