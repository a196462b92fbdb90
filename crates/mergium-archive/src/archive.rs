use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::objects::ObjectData;
use crate::FORMAT_VERSION;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("failed to access archive file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed archive: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unsupported archive format version {found} (expected {FORMAT_VERSION})")]
    UnsupportedFormat { found: u32 },
}

/// Raw on-disk document. Object values stay untyped until realize-time so
/// one bad entry does not fail the whole archive.
#[derive(Debug, Serialize, Deserialize)]
struct ArchiveDoc {
    format: u32,
    #[serde(default)]
    objects: BTreeMap<String, serde_json::Value>,
}

/// A parsed archive. The underlying file handle only lives for the duration
/// of [`SceneArchive::open`]; the value itself is meant to be held inside the
/// scope that imports from it and dropped on every exit path.
#[derive(Debug)]
pub struct SceneArchive {
    doc: ArchiveDoc,
}

/// Result of copying one named object out of an archive. `data` is `None`
/// when the entry exists but could not be realized.
#[derive(Clone, Debug)]
pub struct RealizedObject {
    pub name: String,
    pub data: Option<ObjectData>,
}

impl SceneArchive {
    /// Opens and parses an archive, rejecting unknown format versions.
    pub fn open(path: &Path) -> Result<Self, ArchiveError> {
        let file = File::open(path)?;
        let doc: ArchiveDoc = serde_json::from_reader(BufReader::new(file))?;
        if doc.format != FORMAT_VERSION {
            return Err(ArchiveError::UnsupportedFormat { found: doc.format });
        }
        Ok(Self { doc })
    }

    /// Names of every top-level object, in deterministic (sorted) order.
    pub fn object_names(&self) -> impl Iterator<Item = &str> {
        self.doc.objects.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.doc.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc.objects.is_empty()
    }

    /// Realizes the requested subset. Names that are missing or whose entry
    /// fails to deserialize come back as placeholders (`data: None`).
    pub fn realize<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Vec<RealizedObject> {
        names
            .into_iter()
            .map(|name| {
                let data = self.doc.objects.get(name).and_then(|value| {
                    match serde_json::from_value::<ObjectData>(value.clone()) {
                        Ok(data) => Some(data),
                        Err(err) => {
                            debug!("object {name:?} could not be realized: {err}");
                            None
                        }
                    }
                });
                RealizedObject {
                    name: name.to_owned(),
                    data,
                }
            })
            .collect()
    }

    /// Realizes the full object list, the way a whole-archive import does.
    pub fn realize_all(&self) -> Vec<RealizedObject> {
        self.realize(self.object_names())
    }
}

/// Writes a new archive at the current format version. Existing files are
/// overwritten.
pub fn write_archive(
    path: &Path,
    objects: impl IntoIterator<Item = (String, ObjectData)>,
) -> Result<(), ArchiveError> {
    let doc = ArchiveDoc {
        format: FORMAT_VERSION,
        objects: objects
            .into_iter()
            .map(|(name, data)| Ok((name, serde_json::to_value(data)?)))
            .collect::<Result<_, serde_json::Error>>()?,
    };

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &doc)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::ObjectShape;
    use std::fs;

    fn ball(radius: f32) -> ObjectData {
        ObjectData::new(ObjectShape::Ball { radius })
    }

    #[test]
    fn write_then_open_round_trips_names_and_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.scn");

        let mut cuboid = ObjectData::new(ObjectShape::Cuboid {
            half_extents: [1.0, 0.5, 2.0],
        });
        cuboid.position = [0.0, 3.0, 0.0];
        cuboid.color = Some([0.8, 0.1, 0.1]);

        write_archive(
            &path,
            [("crate".to_owned(), cuboid.clone()), ("ball".to_owned(), ball(0.5))],
        )
        .unwrap();

        let archive = SceneArchive::open(&path).unwrap();
        assert_eq!(archive.len(), 2);
        assert_eq!(archive.object_names().collect::<Vec<_>>(), ["ball", "crate"]);

        let realized = archive.realize_all();
        assert_eq!(realized.len(), 2);
        assert_eq!(realized[0].name, "ball");
        assert_eq!(realized[0].data, Some(ball(0.5)));
        assert_eq!(realized[1].data, Some(cuboid));
    }

    #[test]
    fn malformed_object_realizes_as_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mixed.scn");
        fs::write(
            &path,
            r#"{
                "format": 1,
                "objects": {
                    "good": { "shape": { "type": "ball", "radius": 1.0 } },
                    "broken": { "shape": { "type": "wedge" } }
                }
            }"#,
        )
        .unwrap();

        let archive = SceneArchive::open(&path).unwrap();
        let realized = archive.realize_all();
        assert_eq!(realized.len(), 2);
        assert_eq!(realized[0].name, "broken");
        assert!(realized[0].data.is_none());
        assert_eq!(realized[1].name, "good");
        assert!(realized[1].data.is_some());
    }

    #[test]
    fn realize_of_unknown_name_is_a_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one.scn");
        write_archive(&path, [("ball".to_owned(), ball(1.0))]).unwrap();

        let archive = SceneArchive::open(&path).unwrap();
        let realized = archive.realize(["missing"]);
        assert_eq!(realized.len(), 1);
        assert!(realized[0].data.is_none());
    }

    #[test]
    fn unsupported_format_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("future.scn");
        fs::write(&path, r#"{ "format": 99, "objects": {} }"#).unwrap();

        match SceneArchive::open(&path) {
            Err(ArchiveError::UnsupportedFormat { found: 99 }) => {}
            other => panic!("expected version error, got {other:?}"),
        }
    }

    #[test]
    fn unreadable_or_unparseable_files_are_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.scn");
        assert!(matches!(
            SceneArchive::open(&missing),
            Err(ArchiveError::Io(_))
        ));

        let garbage = dir.path().join("garbage.scn");
        fs::write(&garbage, b"not json at all").unwrap();
        assert!(matches!(
            SceneArchive::open(&garbage),
            Err(ArchiveError::Malformed(_))
        ));
    }

    #[test]
    fn empty_object_table_is_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.scn");
        fs::write(&path, r#"{ "format": 1 }"#).unwrap();

        let archive = SceneArchive::open(&path).unwrap();
        assert!(archive.is_empty());
        assert!(archive.realize_all().is_empty());
    }
}
