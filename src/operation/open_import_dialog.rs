use crate::import::ImportQueue;
use crate::operation::{Operation, Operations};
use crate::ui::UiState;
use bevy::prelude::*;

/// Starts a fresh import workflow: whatever survived the previous dialog is
/// dropped before the review dialog shows up.
pub fn open_import_dialog(
    operations: Res<Operations>,
    mut queue: ResMut<ImportQueue>,
    mut ui_state: ResMut<UiState>,
) {
    for op in operations.iter() {
        if let Operation::OpenImportDialog = op {
            queue.clear();
            ui_state.import_dialog_open = true;
        }
    }
}
