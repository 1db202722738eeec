//! Desk engine - orchestration over the query systems
//!
//! The engine owns only configuration: the profile table, the collider registry and
//! the tuning values. Objects are never stored here; every query takes the current
//! snapshot from the caller and recomputes from scratch.
//!
//! - systems/stacking  - direct supports, closures, resting height
//! - systems/drag      - stacked weight, resistance
//! - systems/friction  - interface friction, follow factor
//! - systems/carry     - drag-follow plan
//! - systems/colliders - compound colliders and probes

use std::sync::Arc;

use glam::Vec3;

use crate::domain::{DeskObject, InteractionConfig, ObjectId, ProfileRegistry};
use crate::systems::colliders::{self, ColliderRegistry, CollisionResult, CollisionVolume, PointProbe};
use crate::systems::{carry, drag, friction, CarriedObject, StackContext};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "snapshot/snapshot.rs"]
mod snapshot;
mod facade;

pub use facade::DeskPhysics;
pub use perf_stats::QueryStats;
pub use snapshot::{DeskSnapshot, SnapshotError};

use perf_timer::PerfTimer;

/// In-process query service for the desk scene.
pub struct DeskEngine {
    profiles: Arc<ProfileRegistry>,
    colliders: ColliderRegistry,
    config: InteractionConfig,
    perf_enabled: bool,
    perf_stats: QueryStats,
}

impl DeskEngine {
    /// Engine with the built-in profile table, built-in colliders and default tuning
    pub fn new() -> Self {
        init::create_desk_engine(Arc::new(ProfileRegistry::from_generated()), InteractionConfig::default())
    }

    pub fn with_profiles(profiles: Arc<ProfileRegistry>, config: InteractionConfig) -> Self {
        init::create_desk_engine(profiles, config)
    }

    pub fn load_profile_bundle_json(&mut self, json: &str) -> Result<(), crate::domain::ProfileError> {
        settings::load_profile_bundle_json(self, json)
    }

    pub fn get_profile_manifest_json(&self) -> String {
        self.profiles.manifest_json()
    }

    pub fn profiles(&self) -> &ProfileRegistry {
        &self.profiles
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    /// Replace the tuning values. Invalid values are rejected and the current config stays.
    pub fn set_config(&mut self, config: InteractionConfig) -> Result<(), crate::domain::ConfigError> {
        settings::set_config(self, config)
    }

    pub fn load_config_json(&mut self, json: &str) -> Result<(), crate::domain::ConfigError> {
        settings::load_config_json(self, json)
    }

    pub fn register_collider(&mut self, type_tag: &str, generator: colliders::ColliderGenerator) {
        settings::register_collider(self, type_tag, generator);
    }

    /// Enable or disable per-query timing (adds overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    pub fn get_perf_stats(&self) -> QueryStats {
        self.perf_stats.clone()
    }

    /// Borrow the engine's tables over one snapshot.
    pub fn context<'a>(&'a self, objects: &'a [DeskObject]) -> StackContext<'a> {
        StackContext::new(&self.profiles, &self.config, objects)
    }

    // === STACKING ===

    pub fn find_direct_supports<'a>(&'a self, base: &DeskObject, objects: &'a [DeskObject]) -> Vec<&'a DeskObject> {
        self.context(objects).find_direct_supports(base)
    }

    pub fn find_all_stacked_above<'a>(&'a self, base: &DeskObject, objects: &'a [DeskObject]) -> Vec<&'a DeskObject> {
        self.context(objects).find_all_stacked_above(base)
    }

    pub fn resting_height(&self, object: &DeskObject, objects: &[DeskObject]) -> f32 {
        self.context(objects).resting_height(object)
    }

    // === DRAG ===

    pub fn compute_stacked_weight(&self, base: &DeskObject, objects: &[DeskObject]) -> f32 {
        drag::compute_stacked_weight(&self.context(objects), base)
    }

    pub fn compute_resistance(&mut self, base: &DeskObject, objects: &[DeskObject]) -> f32 {
        let timer = self.perf_enabled.then(PerfTimer::start);
        let out = drag::compute_resistance(&self.context(objects), base);
        if let Some(t) = timer {
            self.perf_stats.record_stack_query(t.elapsed_ms(), objects.len());
        }
        out
    }

    pub fn compute_interface_friction(&self, bottom: &DeskObject, top: &DeskObject) -> f32 {
        friction::compute_interface_friction(&self.context(&[]), bottom, top)
    }

    pub fn plan_carry(&mut self, base: &DeskObject, objects: &[DeskObject]) -> Vec<CarriedObject> {
        let timer = self.perf_enabled.then(PerfTimer::start);
        let out = carry::plan_carry(&self.context(objects), base);
        if let Some(t) = timer {
            self.perf_stats.record_stack_query(t.elapsed_ms(), objects.len());
        }
        out
    }

    // === COMPOUND COLLIDERS ===

    pub fn has_compound_shape(&self, type_tag: &str) -> bool {
        self.colliders.has_compound_shape(type_tag)
    }

    pub fn get_colliders(&self, object: &DeskObject) -> Vec<CollisionVolume> {
        self.colliders.get_colliders(object)
    }

    pub fn collider_world_positions(&self, object: &DeskObject) -> Vec<Vec3> {
        colliders::collider_world_positions(object, &self.get_colliders(object))
    }

    /// Probe `target`'s compound colliders with a vertical test cylinder.
    pub fn test_point(
        &mut self,
        point_x: f32,
        point_z: f32,
        point_radius: f32,
        point_y: f32,
        point_test_height: f32,
        target: &DeskObject,
    ) -> Option<CollisionResult> {
        let timer = self.perf_enabled.then(PerfTimer::start);
        let probe = PointProbe::new(point_x, point_z, point_radius, point_y, point_test_height);
        let set = self.get_colliders(target);
        let hit = colliders::test_point(&self.config, &probe, target, &set);
        if let Some(t) = timer {
            self.perf_stats.record_probe(t.elapsed_ms(), set.len());
        }
        hit
    }

    /// Probe every compound object in the snapshot; first hit in snapshot order.
    pub fn test_point_all(
        &self,
        probe: &PointProbe,
        objects: &[DeskObject],
    ) -> Option<(ObjectId, CollisionResult)> {
        objects
            .iter()
            .filter(|o| self.colliders.has_compound_shape(&o.object_type))
            .find_map(|o| {
                let set = self.colliders.get_colliders(o);
                colliders::test_point(&self.config, probe, o, &set).map(|hit| (o.id, hit))
            })
    }
}

impl Default for DeskEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
