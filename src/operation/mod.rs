pub use self::operations::{Operation, Operations};
pub use self::plugin::{OperationSet, OperationsPlugin};

pub use self::clear_scene::clear_scene;
pub use self::export_scene::export_scene;
pub use self::import_archives::import_archives;
pub use self::open_import_dialog::open_import_dialog;
pub use self::queue_files::queue_archive_files;
pub use self::unqueue_file::unqueue_archive_file;

mod operations;
mod plugin;

mod clear_scene;
mod export_scene;
mod import_archives;
mod open_import_dialog;
mod queue_files;
mod unqueue_file;

/// Headless app with the full operation pipeline and the resources its
/// systems expect, for driving operations from tests.
#[cfg(test)]
pub(crate) fn test_app() -> bevy::app::App {
    use crate::scene::{ActiveCollection, Collection};
    use crate::styling::ColorGenerator;
    use crate::ui::UiState;
    use bevy::prelude::*;

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(OperationsPlugin)
        .insert_resource(UiState::default())
        .insert_resource(ColorGenerator::default())
        .insert_resource(Assets::<Mesh>::default())
        .insert_resource(Assets::<StandardMaterial>::default());

    let collection = app
        .world_mut()
        .spawn((Collection, SpatialBundle::default()))
        .id();
    app.world_mut().insert_resource(ActiveCollection(collection));
    app
}
