use crate::import::{run_batch, ImportQueue, ImportResult, NoFilesSelected, ReportLog};
use crate::operation::{Operation, Operations};
use crate::scene::{self, ActiveCollection};
use crate::styling::ColorGenerator;
use bevy::prelude::*;
use std::path::Path;

/// Consumes the whole import queue: every realized object of every queued
/// archive is spawned and linked under the active collection, and the
/// per-file outcomes are turned into notifications.
pub fn import_archives(
    mut commands: Commands,
    operations: Res<Operations>,
    mut queue: ResMut<ImportQueue>,
    mut reports: ResMut<ReportLog>,
    mut colors: ResMut<ColorGenerator>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    active: Res<ActiveCollection>,
) {
    for op in operations.iter() {
        if let Operation::ImportQueuedArchives = op {
            let outcome = run_batch(&mut queue, |name, data| {
                let entity = scene::spawn_object(
                    &mut commands,
                    &mut meshes,
                    &mut materials,
                    &mut colors,
                    name,
                    &data,
                );
                commands.entity(active.0).add_child(entity);
            });

            match outcome {
                Ok(report) => {
                    for (path, result) in report.iter() {
                        match result {
                            ImportResult::Imported { objects } => reports.info(format!(
                                "Imported {objects} object(s) from {}",
                                file_label(path)
                            )),
                            ImportResult::NotFound => {
                                reports.warn(format!("File not found: {}", path.display()))
                            }
                            ImportResult::Failed(err) => reports.warn(format!(
                                "Failed to import {}: {err}",
                                file_label(path)
                            )),
                        }
                    }
                    reports.info(format!(
                        "Imported objects from {} file(s)",
                        report.files_processed()
                    ));
                }
                Err(NoFilesSelected) => reports.error("No files selected"),
            }
        }
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
