use std::sync::Arc;

use crate::domain::{InteractionConfig, ProfileRegistry};
use crate::systems::ColliderRegistry;

use super::perf_stats::QueryStats;
use super::DeskEngine;

pub(super) fn create_desk_engine(profiles: Arc<ProfileRegistry>, config: InteractionConfig) -> DeskEngine {
    DeskEngine {
        profiles,
        colliders: ColliderRegistry::with_builtin(),
        config,
        perf_enabled: false,
        perf_stats: QueryStats::default(),
    }
}
