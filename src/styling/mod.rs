pub use self::color_generator::ColorGenerator;
pub use self::plugin::{StylingPlugin, Theme};

mod color_generator;
pub(self) mod dark_mode;
mod plugin;
