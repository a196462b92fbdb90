use crate::import::{ImportQueue, ReportLog};
use crate::operation::{self, Operations};
use bevy::prelude::*;

/// Update-schedule phases for the operation stack: pushers (UI) run strictly
/// before consumers, so an operation pushed this frame is handled this frame,
/// before the stack is wiped in `Last`.
#[derive(SystemSet, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OperationSet {
    Push,
    Process,
}

pub struct OperationsPlugin;

impl Plugin for OperationsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Operations::default())
            .insert_resource(ImportQueue::default())
            .insert_resource(ReportLog::default())
            .configure_sets(Update, OperationSet::Push.before(OperationSet::Process))
            .add_systems(Last, clear_operations)
            .add_systems(
                Update,
                operation::open_import_dialog.in_set(OperationSet::Process),
            )
            .add_systems(
                Update,
                operation::queue_archive_files
                    .after(operation::open_import_dialog)
                    .in_set(OperationSet::Process),
            )
            .add_systems(
                Update,
                operation::unqueue_archive_file
                    .after(operation::queue_archive_files)
                    .in_set(OperationSet::Process),
            )
            .add_systems(
                Update,
                operation::import_archives
                    .after(operation::queue_archive_files)
                    .after(operation::clear_scene)
                    .in_set(OperationSet::Process),
            )
            .add_systems(
                Update,
                operation::export_scene.in_set(OperationSet::Process),
            )
            .add_systems(
                Update,
                operation::clear_scene.in_set(OperationSet::Process),
            );
    }
}

fn clear_operations(mut operations: ResMut<Operations>) {
    operations.clear();
}
