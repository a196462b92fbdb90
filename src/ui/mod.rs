use crate::import::{ImportQueue, ReportLog};
use crate::operation::Operations;
use crate::scene::SceneObject;
use crate::styling::Theme;
use bevy::app::AppExit;
use bevy::prelude::*;
use bevy_egui::EguiContexts;

pub use self::plugin::UiPlugin;
pub use self::ui_state::UiState;

mod import_dialog;
mod main_menu;
mod messages;
mod plugin;
mod right_panel;
mod ui_state;

pub fn update_ui(
    mut commands: Commands,
    mut theme: ResMut<Theme>,
    mut ui_context: EguiContexts,
    mut ui_state: ResMut<UiState>,
    mut operations: ResMut<Operations>,
    mut reports: ResMut<ReportLog>,
    queue: Res<ImportQueue>,
    exit: EventWriter<AppExit>,
    objects: Query<(Entity, &SceneObject)>,
) {
    main_menu::ui(
        &mut theme,
        &mut ui_context,
        &mut ui_state,
        &mut operations,
        exit,
    );
    import_dialog::ui(&mut ui_context, &mut ui_state, &queue, &mut operations);
    messages::ui(&mut ui_context, &mut ui_state, &mut reports);
    right_panel::ui(&mut commands, &mut ui_context, &objects);
}
