//! Desk Physics Engine - stacking, drag resistance and compound collision queries
//!
//! Answers three questions for the desk scene, always from a fresh snapshot:
//! - what rests on an object (directly and transitively)
//! - how much harder a loaded object is to drag, and how its load follows
//! - whether a probe touches an irregular object (the open laptop screen)
//!
//! Architecture:
//! - core/        - local frame transform, visited bitset
//! - domain/      - desk objects, physics profiles, tuning config
//! - systems/     - stacking, drag, friction, carry, compound colliders
//! - simulation/  - engine orchestration and the wasm facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"desk physics engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use glam;
pub use crate::core::{local_to_world, world_to_local};
pub use domain::{DeskObject, InteractionConfig, ObjectId, ObjectPhysicsProfile, ProfileRegistry};
pub use simulation::{DeskEngine, DeskPhysics, DeskSnapshot, QueryStats};
pub use systems::{CarriedObject, CollisionResult, CollisionVolume, PointProbe};

/// Planar frame conversion for host consumers (pen canvas, speaker panning).
/// Returns `[local_x, local_z]`.
#[wasm_bindgen(js_name = worldToLocal)]
pub fn world_to_local_js(world_x: f32, world_z: f32, yaw: f32) -> Vec<f32> {
    let (x, z) = world_to_local(world_x, world_z, yaw);
    vec![x, z]
}

/// Inverse of `worldToLocal`. Returns `[world_x, world_z]`.
#[wasm_bindgen(js_name = localToWorld)]
pub fn local_to_world_js(local_x: f32, local_z: f32, yaw: f32) -> Vec<f32> {
    let (x, z) = local_to_world(local_x, local_z, yaw);
    vec![x, z]
}
