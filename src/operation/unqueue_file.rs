use crate::import::ImportQueue;
use crate::operation::{Operation, Operations};
use bevy::prelude::*;

pub fn unqueue_archive_file(operations: Res<Operations>, mut queue: ResMut<ImportQueue>) {
    for op in operations.iter() {
        if let Operation::UnqueueArchiveFile(index) = op {
            queue.remove(*index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::test_app;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn rows_are_removed_by_index() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.scn"), b"{}").unwrap();
        fs::write(dir.path().join("b.scn"), b"{}").unwrap();

        let mut app = test_app();
        app.world_mut()
            .resource_mut::<ImportQueue>()
            .add_files(dir.path(), [PathBuf::from("a.scn"), PathBuf::from("b.scn")]);

        app.world_mut()
            .resource_mut::<Operations>()
            .push(Operation::UnqueueArchiveFile(0));
        app.update();

        let queue = app.world().resource::<ImportQueue>();
        let left: Vec<_> = queue.entries().iter().map(|entry| entry.file_name()).collect();
        assert_eq!(left, ["b.scn"]);

        // A stale index from a closed dialog frame is ignored.
        app.world_mut()
            .resource_mut::<Operations>()
            .push(Operation::UnqueueArchiveFile(9));
        app.update();
        assert_eq!(app.world().resource::<ImportQueue>().len(), 1);
    }
}
