//! Stacked weight and drag resistance
//!
//! The drag controller asks how much extra pull a base needs. That is a bounded
//! coefficient derived from the weight resting on the base relative to its own weight.

use tracing::debug;

use crate::domain::DeskObject;

use super::stacking::StackContext;

/// Sum of profile weights over the deduplicated stack closure of `base`.
pub fn compute_stacked_weight(ctx: &StackContext<'_>, base: &DeskObject) -> f32 {
    ctx.stacked_above_slots(base)
        .into_iter()
        .map(|slot| ctx.profile(&ctx.objects[slot]).weight)
        .sum()
}

/// Resistance coefficient for a given stacked load on a base of `base_weight`.
///
/// Always in `0.0..=resistance_ceiling`, non-decreasing in `stacked_weight`.
pub fn resistance_for_load(ctx: &StackContext<'_>, base_weight: f32, stacked_weight: f32) -> f32 {
    let cfg = ctx.config;
    let denom = base_weight.max(0.0) + cfg.resistance_epsilon;
    if denom <= 0.0 || stacked_weight <= 0.0 {
        return 0.0;
    }
    let ratio = stacked_weight / denom;
    (ratio * cfg.resistance_gain).min(cfg.resistance_ceiling).max(0.0)
}

pub fn compute_resistance(ctx: &StackContext<'_>, base: &DeskObject) -> f32 {
    let stacked = compute_stacked_weight(ctx, base);
    let resistance = resistance_for_load(ctx, ctx.profile(base).weight, stacked);
    debug!(base = base.id, stacked, resistance, "drag resistance");
    resistance
}
