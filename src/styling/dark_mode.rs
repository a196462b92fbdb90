use crate::styling::Theme;
use bevy::prelude::*;
use bevy_egui::EguiContexts;

pub fn update_dark_mode(mut commands: Commands, theme: Res<Theme>, mut ui_context: EguiContexts) {
    ui_context.ctx_mut().set_visuals(theme.ui_visuals());
    commands.insert_resource(ClearColor(theme.background_color()));
}
