use bevy::prelude::*;
use mergium_archive::ObjectData;

/// Marks a group of linked objects. Imports always target the active one;
/// the group's display name lives in its `Name` component.
#[derive(Component)]
pub struct Collection;

/// The collection entity new objects are linked under.
#[derive(Resource)]
pub struct ActiveCollection(pub Entity);

/// Carried by every object linked into the scene. `data` keeps the archive
/// definition the object was realized from; its placement fields are
/// refreshed from the live `Transform` on export.
#[derive(Component)]
pub struct SceneObject {
    pub name: String,
    pub data: ObjectData,
}
