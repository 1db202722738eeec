use wasm_bindgen::prelude::*;

/// Running query timings, collected only while perf metrics are enabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct QueryStats {
    pub(super) stack_queries: u32,
    pub(super) stack_ms_total: f64,
    pub(super) stack_ms_max: f64,
    pub(super) objects_scanned: u32,
    pub(super) probes: u32,
    pub(super) probe_ms_total: f64,
    pub(super) colliders_tested: u32,
}

impl QueryStats {
    pub(crate) fn reset(&mut self) {
        *self = QueryStats::default();
    }

    pub(crate) fn record_stack_query(&mut self, ms: f64, objects: usize) {
        self.stack_queries = self.stack_queries.saturating_add(1);
        self.stack_ms_total += ms;
        self.stack_ms_max = self.stack_ms_max.max(ms);
        self.objects_scanned = self.objects_scanned.saturating_add(objects as u32);
    }

    pub(crate) fn record_probe(&mut self, ms: f64, colliders: usize) {
        self.probes = self.probes.saturating_add(1);
        self.probe_ms_total += ms;
        self.colliders_tested = self.colliders_tested.saturating_add(colliders as u32);
    }
}

#[wasm_bindgen]
impl QueryStats {
    #[wasm_bindgen(getter)]
    pub fn stack_queries(&self) -> u32 { self.stack_queries }
    #[wasm_bindgen(getter)]
    pub fn stack_ms_total(&self) -> f64 { self.stack_ms_total }
    #[wasm_bindgen(getter)]
    pub fn stack_ms_max(&self) -> f64 { self.stack_ms_max }
    #[wasm_bindgen(getter)]
    pub fn objects_scanned(&self) -> u32 { self.objects_scanned }
    #[wasm_bindgen(getter)]
    pub fn probes(&self) -> u32 { self.probes }
    #[wasm_bindgen(getter)]
    pub fn probe_ms_total(&self) -> f64 { self.probe_ms_total }
    #[wasm_bindgen(getter)]
    pub fn colliders_tested(&self) -> u32 { self.colliders_tested }

    /// Mean stack query time, 0 when nothing was recorded
    #[wasm_bindgen(getter)]
    pub fn stack_ms_mean(&self) -> f64 {
        if self.stack_queries == 0 {
            0.0
        } else {
            self.stack_ms_total / self.stack_queries as f64
        }
    }
}
