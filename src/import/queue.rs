use bevy::prelude::*;
use mergium_archive::is_archive_path;
use std::path::{Component, Path, PathBuf};

/// One pending file, keyed by its normalized path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueEntry {
    pub path: PathBuf,
}

impl QueueEntry {
    /// Short display label for dialog rows.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyQueued,
    Invalid,
}

/// Per-candidate outcome of an add-files call, in input order. `candidate`
/// is the path as given; the queue itself holds the normalized form.
#[derive(Clone, Debug)]
pub struct AddReport {
    pub candidate: PathBuf,
    pub outcome: AddOutcome,
}

/// Ordered list of distinct archive paths pending import. Lives only for the
/// duration of one import workflow: it is cleared when the review dialog
/// opens and again at the end of every import run.
#[derive(Resource, Default)]
pub struct ImportQueue {
    entries: Vec<QueueEntry>,
}

impl ImportQueue {
    /// Validates and appends candidates in order. Candidates are joined to
    /// `base_dir` (absolute candidates ignore it) and normalized lexically,
    /// then rejected when they don't name an archive file on disk or when a
    /// normalized-equal entry is already queued.
    pub fn add_files(
        &mut self,
        base_dir: &Path,
        candidates: impl IntoIterator<Item = PathBuf>,
    ) -> Vec<AddReport> {
        candidates
            .into_iter()
            .map(|candidate| {
                let resolved = normalize_path(&base_dir.join(&candidate));
                let outcome = if !is_archive_path(&resolved) || !resolved.is_file() {
                    AddOutcome::Invalid
                } else if self.contains(&resolved) {
                    AddOutcome::AlreadyQueued
                } else {
                    self.entries.push(QueueEntry {
                        path: resolved.clone(),
                    });
                    AddOutcome::Added
                };
                AddReport { candidate, outcome }
            })
            .collect()
    }

    /// Removes the entry at `index`. Out-of-range indices are ignored: the
    /// dialog is the only caller and its row indices can be one frame stale.
    pub fn remove(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[QueueEntry] {
        &self.entries
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(|entry| entry.path.as_path())
    }

    fn contains(&self, path: &Path) -> bool {
        self.entries.iter().any(|entry| entry.path == path)
    }
}

/// Resolves `.` and `..` components lexically, without touching the
/// filesystem. Symlinks are deliberately not resolved: two spellings of the
/// same file only count as duplicates when they normalize to the same path.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components = path.components().peekable();
    let mut normalized = if let Some(c @ Component::Prefix(..)) = components.peek().copied() {
        components.next();
        PathBuf::from(c.as_os_str())
    } else {
        PathBuf::new()
    };

    for component in components {
        match component {
            Component::Prefix(..) => unreachable!(),
            Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Normal(c) => normalized.push(c),
        }
    }

    normalized
}
