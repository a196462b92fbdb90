use bevy::prelude::*;

#[derive(Resource)]
pub struct UiState {
    pub import_dialog_open: bool,
    pub messages_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            import_dialog_open: false,
            messages_open: true,
        }
    }
}
