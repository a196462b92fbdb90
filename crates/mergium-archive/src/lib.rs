//! On-disk scene archive format: a versioned container of named object
//! definitions that can be inspected and copied into a running scene.

use std::path::Path;

pub use self::archive::{write_archive, ArchiveError, RealizedObject, SceneArchive};
pub use self::objects::{ObjectData, ObjectShape};

mod archive;
mod objects;

/// File extension of scene archives, without the leading dot.
pub const FILE_EXTENSION: &str = "scn";

/// Format version accepted by [`SceneArchive::open`] and written by
/// [`write_archive`].
pub const FORMAT_VERSION: u32 = 1;

/// Checks the archive extension, case-insensitively. Does not touch the
/// filesystem.
pub fn is_archive_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case(FILE_EXTENSION))
        .unwrap_or(false)
}
