//! Stack detection
//!
//! Stacking is never stored. Every query looks at the live snapshot and infers
//! "A rests on B" from geometry:
//! - `detect`  - direct supports of one base (vertical gap + footprint overlap)
//! - `closure` - everything transitively above a base (worklist BFS + visited bitset)
//! - `resting` - where a dropped object would settle

mod closure;
mod detect;
mod resting;

use crate::domain::{DeskObject, InteractionConfig, ObjectId, ObjectPhysicsProfile, ProfileRegistry};

/// Read-only view over one snapshot, shared by the stacking, weight and carry queries.
#[derive(Clone, Copy)]
pub struct StackContext<'a> {
    pub profiles: &'a ProfileRegistry,
    pub config: &'a InteractionConfig,
    pub objects: &'a [DeskObject],
}

impl<'a> StackContext<'a> {
    pub fn new(
        profiles: &'a ProfileRegistry,
        config: &'a InteractionConfig,
        objects: &'a [DeskObject],
    ) -> Self {
        Self { profiles, config, objects }
    }

    #[inline]
    pub fn profile(&self, object: &DeskObject) -> &'a ObjectPhysicsProfile {
        self.profiles.get(&object.object_type)
    }

    /// Snapshot slot of the object with `id`, if present.
    pub fn slot_of(&self, id: ObjectId) -> Option<usize> {
        self.objects.iter().position(|o| o.id == id)
    }

    #[inline]
    fn interaction_radius(&self, object: &DeskObject) -> f32 {
        self.config.interaction_radius(self.profile(object).height)
    }
}
