/// Fixed-size bitset over snapshot slots, used as the visited set for stack traversal.
#[derive(Clone, Debug, Default)]
pub struct SlotSet {
    bits: Vec<u64>,
}

impl SlotSet {
    pub fn with_len(len: usize) -> Self {
        Self {
            bits: vec![0u64; len.div_ceil(64)],
        }
    }

    /// Mark `idx`. Returns `true` if it was not marked before.
    #[inline(always)]
    pub fn insert(&mut self, idx: usize) -> bool {
        let word = idx >> 6; // idx / 64
        let bit = idx & 63; // idx % 64
        match self.bits.get_mut(word) {
            Some(w) if *w & (1u64 << bit) == 0 => {
                *w |= 1u64 << bit;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_reports_first_visit_only() {
        let mut set = SlotSet::with_len(130);
        assert!(set.insert(0));
        assert!(set.insert(129));
        assert!(!set.insert(129));
        assert!(!set.insert(0));
        // neighbouring word untouched
        assert!(set.insert(64));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut set = SlotSet::with_len(3);
        assert!(!set.insert(200));
        assert!(set.insert(2));
    }
}
