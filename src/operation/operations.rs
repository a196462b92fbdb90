use bevy::prelude::*;
use std::path::PathBuf;

pub enum Operation {
    /// Clears the import queue and opens the review dialog.
    OpenImportDialog,
    /// Validates and appends candidate archives to the import queue.
    QueueArchiveFiles {
        base_dir: PathBuf,
        files: Vec<PathBuf>,
    },
    /// Drops one pending entry by its dialog row index.
    UnqueueArchiveFile(usize),
    /// Runs the batch import over the whole queue.
    ImportQueuedArchives,
    ExportScene(PathBuf),
    ClearScene,
}

#[derive(Resource)]
pub struct Operations {
    stack: Vec<Operation>,
}

impl Default for Operations {
    fn default() -> Self {
        Self::new()
    }
}

impl Operations {
    pub fn new() -> Self {
        Self { stack: vec![] }
    }

    pub fn push(&mut self, command: Operation) {
        self.stack.push(command);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Operation> {
        self.stack.iter()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }
}
