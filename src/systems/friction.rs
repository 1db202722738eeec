//! Interface friction between two directly stacked objects.

use crate::domain::DeskObject;

use super::stacking::StackContext;

/// Grip between `bottom` and `top`. Lower values mean the top object slips more
/// when the bottom one is dragged. Symmetric in its arguments.
pub fn compute_interface_friction(ctx: &StackContext<'_>, bottom: &DeskObject, top: &DeskObject) -> f32 {
    let fb = ctx.profile(bottom).friction;
    let ft = ctx.profile(top).friction;
    fb.min(ft) * ctx.config.stacking_friction
}

/// How faithfully `top` follows a dragged `bottom`, in `0.0..=1.0`.
pub fn follow_factor(ctx: &StackContext<'_>, bottom: &DeskObject, top: &DeskObject) -> f32 {
    let friction = compute_interface_friction(ctx, bottom, top);
    let threshold = ctx.config.slip_threshold;
    if threshold <= 0.0 {
        return 1.0;
    }
    (friction / threshold).clamp(0.0, 1.0)
}
