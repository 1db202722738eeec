//! Carry planning for a dragged base
//!
//! Walks the stack above a base breadth-first and assigns every dependent a follow
//! factor: its parent's factor scaled by how well the pair grips. Objects reached
//! through several supports keep the factor from the first (shallowest) one.

use std::collections::VecDeque;

use serde::Serialize;

use crate::core::SlotSet;
use crate::domain::{DeskObject, ObjectId};

use super::friction::follow_factor;
use super::stacking::StackContext;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarriedObject {
    pub id: ObjectId,
    /// Object it rests on in this plan
    pub carried_by: ObjectId,
    /// 1.0 rides along rigidly, lower values slip proportionally
    pub follow: f32,
}

pub fn plan_carry(ctx: &StackContext<'_>, base: &DeskObject) -> Vec<CarriedObject> {
    let mut visited = SlotSet::with_len(ctx.objects.len());
    if let Some(slot) = ctx.slot_of(base.id) {
        visited.insert(slot);
    }

    let mut plan = Vec::new();
    let mut queue: VecDeque<(&DeskObject, f32)> = VecDeque::new();
    queue.push_back((base, 1.0));

    while let Some((parent, parent_follow)) = queue.pop_front() {
        for slot in ctx.direct_support_slots(parent) {
            if !visited.insert(slot) {
                continue;
            }
            let child = &ctx.objects[slot];
            let follow = parent_follow * follow_factor(ctx, parent, child);
            plan.push(CarriedObject {
                id: child.id,
                carried_by: parent.id,
                follow,
            });
            queue.push_back((child, follow));
        }
    }

    plan
}
