//! Domain data: desk objects, their physics profiles and the model tuning.

pub mod config;
pub mod object;
pub mod profile;
pub mod registry;

pub use config::{ConfigError, InteractionConfig};
pub use object::{DeskObject, ObjectId};
pub use profile::{ObjectPhysicsProfile, DEFAULT_PROFILE};
pub use registry::{ProfileError, ProfileRegistry};
