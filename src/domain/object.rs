use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Stable identity of a desk object, assigned by the scene layer.
pub type ObjectId = u32;

/// One participant of the desk scene, as seen by the engine for a single query.
///
/// The interaction flags are owned by the drag / pick-up / inspection systems.
/// The engine only reads them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeskObject {
    pub id: ObjectId,
    /// Type tag used to resolve the physics profile
    #[serde(rename = "type")]
    pub object_type: String,
    pub position: Vec3,
    /// Rotation about the vertical axis (radians)
    #[serde(default)]
    pub yaw: f32,
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default)]
    pub is_fallen: bool,
    #[serde(default)]
    pub is_lifted: bool,
    #[serde(default)]
    pub is_examining: bool,
    #[serde(default)]
    pub is_returning: bool,
}

fn default_scale() -> f32 {
    1.0
}

impl DeskObject {
    pub fn new(id: ObjectId, object_type: impl Into<String>, position: Vec3) -> Self {
        Self {
            id,
            object_type: object_type.into(),
            position,
            yaw: 0.0,
            scale: 1.0,
            is_fallen: false,
            is_lifted: false,
            is_examining: false,
            is_returning: false,
        }
    }

    pub fn with_yaw(mut self, yaw: f32) -> Self {
        self.yaw = yaw;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// True while another system has taken the object out of the resting scene
    /// (fallen over, held, being examined or flying back to its slot).
    #[inline]
    pub fn is_detached(&self) -> bool {
        self.is_fallen || self.is_lifted || self.is_examining || self.is_returning
    }

    /// Planar distance between the two object centers (x/z only).
    #[inline]
    pub fn planar_distance(&self, other: &DeskObject) -> f32 {
        let dx = self.position.x - other.position.x;
        let dz = self.position.z - other.position.z;
        (dx * dx + dz * dz).sqrt()
    }
}
