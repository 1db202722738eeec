//! Compound colliders
//!
//! Objects whose silhouette one primitive cannot cover register a generator here.
//! Everything else gets an empty set and keeps its single bounding primitive,
//! which lives outside this engine.

mod laptop;
mod probe;
mod types;

use std::collections::HashMap;

use crate::domain::profile::TYPE_LAPTOP;
use crate::domain::DeskObject;

pub use laptop::{screen_colliders, COLLIDER_COUNT as LAPTOP_COLLIDER_COUNT};
pub use probe::{collider_world_positions, test_point};
pub use types::{CollisionResult, CollisionVolume, PointProbe};

/// Builds the local-frame collider set of one object.
pub type ColliderGenerator = fn(&DeskObject) -> Vec<CollisionVolume>;

/// Type tag → collider generator.
#[derive(Clone)]
pub struct ColliderRegistry {
    generators: HashMap<String, ColliderGenerator>,
}

impl ColliderRegistry {
    pub fn empty() -> Self {
        Self {
            generators: HashMap::new(),
        }
    }

    /// Registry with the built-in compound shapes.
    pub fn with_builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(TYPE_LAPTOP, screen_colliders);
        registry
    }

    /// Register (or replace) the generator for `type_tag`.
    pub fn register(&mut self, type_tag: &str, generator: ColliderGenerator) {
        self.generators.insert(type_tag.to_string(), generator);
    }

    pub fn has_compound_shape(&self, type_tag: &str) -> bool {
        self.generators.contains_key(type_tag)
    }

    pub fn get_colliders(&self, object: &DeskObject) -> Vec<CollisionVolume> {
        match self.generators.get(&object.object_type) {
            Some(generator) => generator(object),
            None => Vec::new(),
        }
    }
}

impl Default for ColliderRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}
