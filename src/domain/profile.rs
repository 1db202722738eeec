//! Object physics profiles
//!
//! Each desk object type has one immutable profile describing how heavy it is, how
//! tall it stands and how grippy its surfaces are. The built-in table below mirrors
//! the default desk content; hosts can replace it with a JSON bundle (see `registry`).

use serde::{Deserialize, Serialize};

/// Physical attributes of one object type.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectPhysicsProfile {
    /// Abstract mass units
    pub weight: f32,
    /// Reserved for tipping logic, not read by the engine
    pub stability: f32,
    /// Vertical extent in world units
    pub height: f32,
    /// Vertical seating offset (scaled by the object's scale)
    pub base_offset: f32,
    /// Surface grip, 0..=1
    pub friction: f32,
    /// Nothing should rest on top of this object
    pub no_stacking_on_top: bool,
}

impl ObjectPhysicsProfile {
    pub const fn new(weight: f32, stability: f32, height: f32, base_offset: f32, friction: f32) -> Self {
        Self {
            weight,
            stability,
            height,
            base_offset,
            friction,
            no_stacking_on_top: false,
        }
    }

    pub const fn no_stacking(mut self) -> Self {
        self.no_stacking_on_top = true;
        self
    }
}

impl Default for ObjectPhysicsProfile {
    fn default() -> Self {
        DEFAULT_PROFILE
    }
}

/// Profile used for any type tag the registry does not know.
pub const DEFAULT_PROFILE: ObjectPhysicsProfile = ObjectPhysicsProfile::new(1.0, 0.5, 0.1, 0.0, 0.5);

pub const TYPE_BOOK: &str = "book";
pub const TYPE_NOTEBOOK: &str = "notebook";
pub const TYPE_PEN: &str = "pen";
pub const TYPE_LAPTOP: &str = "laptop";

/// Built-in profile table: (type tag, profile).
pub const PROFILE_DATA: &[(&str, ObjectPhysicsProfile)] = &[
    (TYPE_BOOK, ObjectPhysicsProfile::new(1.5, 0.9, 0.15, 0.0, 0.6)),
    (TYPE_NOTEBOOK, ObjectPhysicsProfile::new(0.8, 0.9, 0.1, 0.0, 0.55)),
    (TYPE_PEN, ObjectPhysicsProfile::new(0.1, 0.2, 0.02, 0.01, 0.3)),
    ("pencil", ObjectPhysicsProfile::new(0.08, 0.2, 0.02, 0.01, 0.35)),
    (TYPE_LAPTOP, ObjectPhysicsProfile::new(3.0, 0.95, 0.04, 0.0, 0.7).no_stacking()),
    ("mug", ObjectPhysicsProfile::new(0.6, 0.6, 0.2, 0.0, 0.5).no_stacking()),
    ("coffee", ObjectPhysicsProfile::new(0.7, 0.55, 0.22, 0.0, 0.5).no_stacking()),
    ("phone", ObjectPhysicsProfile::new(0.3, 0.85, 0.02, 0.0, 0.4)),
    ("plant", ObjectPhysicsProfile::new(2.0, 0.7, 0.5, 0.0, 0.6).no_stacking()),
    ("lamp", ObjectPhysicsProfile::new(2.5, 0.8, 0.8, 0.0, 0.6).no_stacking()),
    ("clock", ObjectPhysicsProfile::new(0.8, 0.5, 0.35, 0.0, 0.5).no_stacking()),
    ("paper", ObjectPhysicsProfile::new(0.05, 1.0, 0.005, 0.0, 0.3)),
    ("magazine", ObjectPhysicsProfile::new(0.4, 0.95, 0.03, 0.0, 0.35)),
    ("headphones", ObjectPhysicsProfile::new(0.5, 0.4, 0.15, 0.0, 0.65)),
    ("calculator", ObjectPhysicsProfile::new(0.3, 0.9, 0.03, 0.0, 0.6)),
    ("globe", ObjectPhysicsProfile::new(1.5, 0.5, 0.6, 0.0, 0.5).no_stacking()),
    ("photo-frame", ObjectPhysicsProfile::new(0.5, 0.3, 0.3, 0.0, 0.5).no_stacking()),
    ("desk-organizer", ObjectPhysicsProfile::new(1.2, 0.9, 0.25, 0.0, 0.6)),
];
