use bevy::prelude::*;

/// Deterministic color source for objects imported without an explicit
/// color. Fixed seed so reruns of the same import produce the same palette.
#[derive(Resource)]
pub struct ColorGenerator {
    rng: oorandom::Rand32,
}

impl Default for ColorGenerator {
    fn default() -> Self {
        Self {
            rng: oorandom::Rand32::new(123456),
        }
    }
}

impl ColorGenerator {
    pub fn gen_color(&mut self) -> Color {
        Color::srgb(
            self.rng.rand_float(),
            self.rng.rand_float(),
            self.rng.rand_float(),
        )
    }
}
