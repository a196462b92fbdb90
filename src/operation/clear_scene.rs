use crate::operation::{Operation, Operations};
use crate::scene::SceneObject;
use bevy::prelude::*;

pub fn clear_scene(
    mut commands: Commands,
    operations: Res<Operations>,
    to_remove: Query<Entity, With<SceneObject>>,
) {
    for op in operations.iter() {
        if let Operation::ClearScene = op {
            for entity in to_remove.iter() {
                commands.entity(entity).despawn_recursive();
            }
        }
    }
}
