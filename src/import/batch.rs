use crate::import::ImportQueue;
use mergium_archive::{ObjectData, SceneArchive};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// An import run was triggered on an empty queue.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("No files selected")]
pub struct NoFilesSelected;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImportResult {
    /// Archive opened; `objects` counts the realized (non-placeholder)
    /// objects handed to the link callback.
    Imported { objects: usize },
    /// The file existed when queued but is gone now.
    NotFound,
    /// The file exists but could not be opened or parsed.
    Failed(String),
}

/// Ordered per-file outcomes of one batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    outcomes: Vec<(PathBuf, ImportResult)>,
}

impl BatchReport {
    /// Number of files the run attempted, successful or not.
    pub fn files_processed(&self) -> usize {
        self.outcomes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(PathBuf, ImportResult)> {
        self.outcomes.iter()
    }
}

/// Imports every queued archive in order, calling `link` once per realized
/// object. Each file is failure-isolated: a missing or unreadable archive is
/// recorded in the report and the run moves on. The queue is cleared before
/// returning no matter how the individual files fared.
pub fn run_batch(
    queue: &mut ImportQueue,
    mut link: impl FnMut(&str, ObjectData),
) -> Result<BatchReport, NoFilesSelected> {
    if queue.is_empty() {
        return Err(NoFilesSelected);
    }

    let paths: Vec<PathBuf> = queue.paths().map(Path::to_path_buf).collect();
    let mut report = BatchReport::default();

    for path in paths {
        let result = import_one(&path, &mut link);
        report.outcomes.push((path, result));
    }

    queue.clear();
    Ok(report)
}

fn import_one(path: &Path, link: &mut impl FnMut(&str, ObjectData)) -> ImportResult {
    if !path.exists() {
        return ImportResult::NotFound;
    }

    // The archive handle only lives for this scope, whatever the outcome.
    match SceneArchive::open(path) {
        Ok(archive) => {
            let mut objects = 0;
            for realized in archive.realize_all() {
                if let Some(data) = realized.data {
                    link(&realized.name, data);
                    objects += 1;
                }
            }
            ImportResult::Imported { objects }
        }
        Err(err) => ImportResult::Failed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mergium_archive::{write_archive, ObjectShape};
    use std::fs;

    fn ball(radius: f32) -> ObjectData {
        ObjectData::new(ObjectShape::Ball { radius })
    }

    fn queue_of(dir: &Path, names: &[&str]) -> ImportQueue {
        let mut queue = ImportQueue::default();
        let reports = queue.add_files(dir, names.iter().copied().map(PathBuf::from));
        assert_eq!(queue.len(), reports.len());
        queue
    }

    #[test]
    fn empty_queue_refuses_to_run() {
        let mut queue = ImportQueue::default();
        let outcome = run_batch(&mut queue, |_, _| panic!("nothing to link"));
        assert_eq!(outcome.unwrap_err(), NoFilesSelected);
    }

    #[test]
    fn outcomes_follow_queue_order_and_failures_are_isolated() {
        let dir = tempfile::tempdir().unwrap();
        write_archive(
            &dir.path().join("good.scn"),
            [
                ("ball".to_owned(), ball(0.5)),
                ("ball2".to_owned(), ball(1.0)),
            ],
        )
        .unwrap();
        fs::write(dir.path().join("corrupt.scn"), b"not json").unwrap();
        fs::write(dir.path().join("doomed.scn"), b"{}").unwrap();

        let mut queue = queue_of(dir.path(), &["good.scn", "doomed.scn", "corrupt.scn"]);
        fs::remove_file(dir.path().join("doomed.scn")).unwrap();

        let mut linked = Vec::new();
        let report = run_batch(&mut queue, |name, _| linked.push(name.to_owned())).unwrap();

        let outcomes: Vec<_> = report.iter().map(|(_, result)| result.clone()).collect();
        assert_eq!(outcomes[0], ImportResult::Imported { objects: 2 });
        assert_eq!(outcomes[1], ImportResult::NotFound);
        assert!(matches!(outcomes[2], ImportResult::Failed(_)));

        assert_eq!(report.files_processed(), 3);
        assert_eq!(linked, ["ball", "ball2"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn placeholder_objects_are_skipped_and_not_counted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("mixed.scn"),
            r#"{
                "format": 1,
                "objects": {
                    "broken": { "shape": { "type": "wedge" } },
                    "good": { "shape": { "type": "ball", "radius": 1.0 } }
                }
            }"#,
        )
        .unwrap();

        let mut queue = queue_of(dir.path(), &["mixed.scn"]);
        let mut linked = Vec::new();
        let report = run_batch(&mut queue, |name, _| linked.push(name.to_owned())).unwrap();

        let outcomes: Vec<_> = report.iter().collect();
        assert_eq!(outcomes[0].1, ImportResult::Imported { objects: 1 });
        assert_eq!(linked, ["good"]);
    }

    #[test]
    fn unsupported_archive_version_fails_that_file_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("future.scn"),
            r#"{ "format": 99, "objects": {} }"#,
        )
        .unwrap();
        write_archive(&dir.path().join("good.scn"), [("ball".to_owned(), ball(1.0))]).unwrap();

        let mut queue = queue_of(dir.path(), &["future.scn", "good.scn"]);
        let report = run_batch(&mut queue, |_, _| {}).unwrap();

        let outcomes: Vec<_> = report.iter().collect();
        assert!(matches!(outcomes[0].1, ImportResult::Failed(_)));
        assert_eq!(outcomes[1].1, ImportResult::Imported { objects: 1 });
    }

    #[test]
    fn queue_is_cleared_even_when_every_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("corrupt.scn"), b"]][[").unwrap();

        let mut queue = queue_of(dir.path(), &["corrupt.scn"]);
        let report = run_batch(&mut queue, |_, _| panic!("nothing links")).unwrap();

        assert_eq!(report.files_processed(), 1);
        assert!(queue.is_empty());
    }
}
