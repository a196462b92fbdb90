pub use self::collection::{ActiveCollection, Collection, SceneObject};
pub use self::plugin::ScenePlugin;
pub use self::spawn::spawn_object;

mod collection;
mod plugin;
mod spawn;
