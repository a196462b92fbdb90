use serde::{Deserialize, Serialize};

/// Shape of a top-level archive object, sized the way collision shapes
/// usually are (half-extents rather than full lengths).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectShape {
    Cuboid { half_extents: [f32; 3] },
    Ball { radius: f32 },
    Capsule { radius: f32, half_height: f32 },
    Cylinder { radius: f32, half_height: f32 },
}

/// One realized top-level object definition. Every field except the shape is
/// optional in the on-disk form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectData {
    pub shape: ObjectShape,
    #[serde(default)]
    pub position: [f32; 3],
    /// Quaternion `[x, y, z, w]`.
    #[serde(default = "default_rotation")]
    pub rotation: [f32; 4],
    /// sRGB components in `[0, 1]`. `None` leaves the color to the
    /// importing application.
    #[serde(default)]
    pub color: Option<[f32; 3]>,
}

fn default_rotation() -> [f32; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

impl ObjectData {
    pub fn new(shape: ObjectShape) -> Self {
        Self {
            shape,
            position: [0.0; 3],
            rotation: default_rotation(),
            color: None,
        }
    }
}
