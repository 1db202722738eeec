//! Query systems over a desk snapshot
//!
//! None of these hold state between calls: each query re-derives its answer
//! from the objects it is handed.

pub mod carry;
pub mod colliders;
pub mod drag;
pub mod friction;
pub mod stacking;

pub use carry::{plan_carry, CarriedObject};
pub use colliders::{ColliderRegistry, CollisionResult, CollisionVolume, PointProbe};
pub use drag::{compute_resistance, compute_stacked_weight};
pub use friction::compute_interface_friction;
pub use stacking::StackContext;
