use super::UiState;
use crate::operation::OperationSet;
use bevy::prelude::*;

/// Plugin responsible for creating the UI used to review, trigger, and
/// monitor imports.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(bevy_egui::EguiPlugin)
            .insert_resource(UiState::default())
            .add_systems(Update, super::update_ui.in_set(OperationSet::Push));
    }
}
