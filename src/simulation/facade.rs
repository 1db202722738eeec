use wasm_bindgen::prelude::*;

use crate::domain::ObjectId;

use super::perf_stats::QueryStats;
use super::snapshot::DeskSnapshot;
use super::DeskEngine;

/// Browser-facing handle: the engine plus the last synced desk snapshot.
///
/// Queries address objects by id. An id missing from the snapshot behaves like an
/// object with nothing around it (zero weight, zero resistance, no hits).
#[wasm_bindgen]
pub struct DeskPhysics {
    engine: DeskEngine,
    snapshot: DeskSnapshot,
}

#[wasm_bindgen]
impl DeskPhysics {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            engine: DeskEngine::new(),
            snapshot: DeskSnapshot::default(),
        }
    }

    pub fn load_profile_bundle(&mut self, json: String) -> Result<(), JsValue> {
        self.engine
            .load_profile_bundle_json(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn get_profile_manifest_json(&self) -> String {
        self.engine.get_profile_manifest_json()
    }

    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.engine
            .load_config_json(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Replace the snapshot with the host's current objects (JSON array).
    pub fn sync_objects(&mut self, json: String) -> Result<(), JsValue> {
        self.snapshot = DeskSnapshot::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn object_count(&self) -> usize {
        self.snapshot.len()
    }

    // === STACKING / DRAG API ===

    pub fn find_direct_supports(&self, base_id: ObjectId) -> Vec<ObjectId> {
        let Some(base) = self.snapshot.get(base_id) else {
            return Vec::new();
        };
        self.engine
            .find_direct_supports(base, self.snapshot.objects())
            .iter()
            .map(|o| o.id)
            .collect()
    }

    pub fn find_all_stacked_above(&self, base_id: ObjectId) -> Vec<ObjectId> {
        let Some(base) = self.snapshot.get(base_id) else {
            return Vec::new();
        };
        self.engine
            .find_all_stacked_above(base, self.snapshot.objects())
            .iter()
            .map(|o| o.id)
            .collect()
    }

    pub fn compute_stacked_weight(&self, base_id: ObjectId) -> f32 {
        match self.snapshot.get(base_id) {
            Some(base) => self.engine.compute_stacked_weight(base, self.snapshot.objects()),
            None => 0.0,
        }
    }

    pub fn compute_resistance(&mut self, base_id: ObjectId) -> f32 {
        match self.snapshot.get(base_id) {
            Some(base) => self.engine.compute_resistance(base, self.snapshot.objects()),
            None => 0.0,
        }
    }

    /// Returns 0 when either object is missing from the snapshot.
    pub fn compute_interface_friction(&self, bottom_id: ObjectId, top_id: ObjectId) -> f32 {
        match (self.snapshot.get(bottom_id), self.snapshot.get(top_id)) {
            (Some(bottom), Some(top)) => self.engine.compute_interface_friction(bottom, top),
            _ => 0.0,
        }
    }

    /// JSON array of `{id, carriedBy, follow}` in BFS order.
    pub fn plan_carry_json(&mut self, base_id: ObjectId) -> String {
        let plan = match self.snapshot.get(base_id) {
            Some(base) => self.engine.plan_carry(base, self.snapshot.objects()),
            None => Vec::new(),
        };
        serde_json::to_string(&plan).unwrap_or_else(|_| "[]".to_string())
    }

    /// Y the object would settle at if released now; the desk surface for an unknown id.
    pub fn resting_height(&self, id: ObjectId) -> f32 {
        match self.snapshot.get(id) {
            Some(o) => self.engine.resting_height(o, self.snapshot.objects()),
            None => self.engine.config().desk_surface_y,
        }
    }

    // === COLLIDER API ===

    /// Collision result as JSON, or `"null"` when nothing was hit.
    pub fn test_point_json(
        &mut self,
        point_x: f32,
        point_z: f32,
        point_radius: f32,
        point_y: f32,
        point_test_height: f32,
        target_id: ObjectId,
    ) -> String {
        let hit = match self.snapshot.get(target_id) {
            Some(target) => self
                .engine
                .test_point(point_x, point_z, point_radius, point_y, point_test_height, target),
            None => None,
        };
        serde_json::to_string(&hit).unwrap_or_else(|_| "null".to_string())
    }

    /// Packed `[x, y, z, x, y, z, ...]` collider centers for debug overlays.
    pub fn collider_positions(&self, target_id: ObjectId) -> Vec<f32> {
        let Some(target) = self.snapshot.get(target_id) else {
            return Vec::new();
        };
        self.engine
            .collider_world_positions(target)
            .iter()
            .flat_map(|p| [p.x, p.y, p.z])
            .collect()
    }

    // === PERF ===

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.engine.enable_perf_metrics(enabled);
    }

    pub fn get_perf_stats(&self) -> QueryStats {
        self.engine.get_perf_stats()
    }
}

impl Default for DeskPhysics {
    fn default() -> Self {
        Self::new()
    }
}
