use std::collections::VecDeque;

use tracing::trace;

use crate::core::SlotSet;
use crate::domain::DeskObject;

use super::StackContext;

impl<'a> StackContext<'a> {
    /// Snapshot slots of everything resting on `base`, directly or through other objects.
    ///
    /// Worklist BFS with a visited bitset: each slot is expanded once, so an object
    /// reachable through several supports appears once and cyclic geometry terminates.
    /// The base never appears in its own closure.
    pub fn stacked_above_slots(&self, base: &DeskObject) -> Vec<usize> {
        let mut visited = SlotSet::with_len(self.objects.len());
        if let Some(slot) = self.slot_of(base.id) {
            visited.insert(slot);
        }

        let mut out = Vec::new();
        let mut queue: VecDeque<usize> = VecDeque::new();

        for slot in self.direct_support_slots(base) {
            if visited.insert(slot) {
                out.push(slot);
                queue.push_back(slot);
            }
        }

        while let Some(slot) = queue.pop_front() {
            for above in self.direct_support_slots(&self.objects[slot]) {
                if visited.insert(above) {
                    out.push(above);
                    queue.push_back(above);
                }
            }
        }

        trace!(base = base.id, stacked = out.len(), "stack closure");
        out
    }

    /// Transitive stack closure of `base`, deduplicated by identity, in BFS order.
    pub fn find_all_stacked_above(&self, base: &DeskObject) -> Vec<&'a DeskObject> {
        self.stacked_above_slots(base)
            .into_iter()
            .map(|slot| &self.objects[slot])
            .collect()
    }
}
