use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{ConfigError, InteractionConfig, ProfileError, ProfileRegistry};
use crate::systems::colliders::ColliderGenerator;

use super::DeskEngine;

pub(super) fn load_profile_bundle_json(engine: &mut DeskEngine, json: &str) -> Result<(), ProfileError> {
    match ProfileRegistry::from_bundle_json(json) {
        Ok(registry) => {
            engine.profiles = Arc::new(registry);
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "rejected profile bundle, keeping current profiles");
            Err(e)
        }
    }
}

pub(super) fn set_config(engine: &mut DeskEngine, config: InteractionConfig) -> Result<(), ConfigError> {
    if let Err(e) = config.validate() {
        warn!(error = %e, "rejected interaction config, keeping current one");
        return Err(e);
    }
    debug!(?config, "interaction config replaced");
    engine.config = config;
    Ok(())
}

pub(super) fn load_config_json(engine: &mut DeskEngine, json: &str) -> Result<(), ConfigError> {
    let config = InteractionConfig::from_json(json)?;
    set_config(engine, config)
}

pub(super) fn register_collider(engine: &mut DeskEngine, type_tag: &str, generator: ColliderGenerator) {
    debug!(type_tag, "compound collider registered");
    engine.colliders.register(type_tag, generator);
}

pub(super) fn enable_perf_metrics(engine: &mut DeskEngine, enabled: bool) {
    engine.perf_enabled = enabled;
    if !enabled {
        engine.perf_stats.reset();
    }
}
