use crate::scene::{ActiveCollection, Collection};
use bevy::prelude::*;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_main_collection);
    }
}

fn setup_main_collection(mut commands: Commands) {
    let collection = commands
        .spawn((Collection, Name::new("Main"), SpatialBundle::default()))
        .id();
    commands.insert_resource(ActiveCollection(collection));
}
