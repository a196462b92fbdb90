use crate::import::ReportLog;
use crate::operation::{Operation, Operations};
use crate::scene::SceneObject;
use bevy::prelude::*;
use mergium_archive::{is_archive_path, write_archive, FILE_EXTENSION};
use std::collections::BTreeSet;

/// Writes every linked object into a new archive. Display names may repeat
/// in the scene but archives are keyed by name, so clashes get `_2`, `_3`…
/// suffixes.
pub fn export_scene(
    operations: Res<Operations>,
    mut reports: ResMut<ReportLog>,
    objects: Query<(&SceneObject, &Transform)>,
) {
    for op in operations.iter() {
        if let Operation::ExportScene(path) = op {
            let mut path = path.clone();
            if !is_archive_path(&path) {
                path.set_extension(FILE_EXTENSION);
            }

            let mut exported: Vec<_> = objects
                .iter()
                .map(|(object, transform)| {
                    let mut data = object.data.clone();
                    data.position = transform.translation.to_array();
                    data.rotation = transform.rotation.to_array();
                    (object.name.clone(), data)
                })
                .collect();
            exported.sort_by(|(a, _), (b, _)| a.cmp(b));

            let mut used = BTreeSet::new();
            let entries: Vec<_> = exported
                .into_iter()
                .map(|(name, data)| {
                    let name = unique_name(name, &mut used);
                    (name, data)
                })
                .collect();

            let count = entries.len();
            match write_archive(&path, entries) {
                Ok(()) => reports.info(format!(
                    "Exported {count} object(s) to {}",
                    path.display()
                )),
                Err(err) => reports.error(format!("Failed to export scene: {err}")),
            }
        }
    }
}

fn unique_name(base: String, used: &mut BTreeSet<String>) -> String {
    let mut name = base.clone();
    let mut suffix = 2;
    while used.contains(&name) {
        name = format!("{base}_{suffix}");
        suffix += 1;
    }
    used.insert(name.clone());
    name
}
