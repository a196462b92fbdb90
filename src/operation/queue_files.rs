use crate::import::{AddOutcome, ImportQueue, ReportLog};
use crate::operation::{Operation, Operations};
use bevy::prelude::*;

pub fn queue_archive_files(
    operations: Res<Operations>,
    mut queue: ResMut<ImportQueue>,
    mut reports: ResMut<ReportLog>,
) {
    for op in operations.iter() {
        if let Operation::QueueArchiveFiles { base_dir, files } = op {
            for report in queue.add_files(base_dir, files.iter().cloned()) {
                // Notifications show the candidate as the user gave it.
                let shown = report.candidate.display();
                match report.outcome {
                    AddOutcome::Added => reports.info(format!("Added file: {shown}")),
                    AddOutcome::AlreadyQueued => {
                        reports.warn(format!("File already added: {shown}"))
                    }
                    AddOutcome::Invalid => reports.warn(format!("Invalid file: {shown}")),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::ReportLevel;
    use crate::operation::test_app;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn queueing_reports_each_candidate_and_clears_the_stack() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.scn"), b"{}").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();

        let mut app = test_app();
        app.world_mut()
            .resource_mut::<Operations>()
            .push(Operation::QueueArchiveFiles {
                base_dir: dir.path().to_path_buf(),
                files: vec![
                    PathBuf::from("a.scn"),
                    PathBuf::from("a.scn"),
                    PathBuf::from("notes.txt"),
                ],
            });
        app.update();

        let queue = app.world().resource::<ImportQueue>();
        assert_eq!(queue.len(), 1);

        let log = app.world().resource::<ReportLog>();
        let reported: Vec<_> = log
            .iter()
            .map(|report| (report.level, report.message.clone()))
            .collect();
        assert_eq!(
            reported,
            [
                (ReportLevel::Info, "Added file: a.scn".to_owned()),
                (ReportLevel::Warning, "File already added: a.scn".to_owned()),
                (ReportLevel::Warning, "Invalid file: notes.txt".to_owned()),
            ]
        );

        // The stack is emptied in Last, so the next frame must not re-queue.
        app.update();
        assert_eq!(app.world().resource::<ImportQueue>().len(), 1);
        assert_eq!(app.world().resource::<ReportLog>().iter().count(), 3);
    }
}
