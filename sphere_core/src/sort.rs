//! Incremental depth ordering.
//!
//! Sorted ordering of particle slots that makes two assumptions:
//! - No slots are added or removed after construction.
//! - When a slot's sort key changes, it changes only slightly.
//!
//! Under those assumptions a full per-frame re-sort is wasted work; after
//! each mutation one local bubble pass restores order at a cost
//! proportional to how far the slot actually moved.

/// Ordering of stable `usize` slots by a caller-supplied key.
///
/// The sorter never stores keys; it re-reads them through the closure
/// passed to each call, so the caller decides what "depth" means.
#[derive(Debug, Clone)]
pub struct DepthOrder {
    /// position -> slot, ascending key.
    order: Vec<usize>,
    /// slot -> position. Always consistent with `order`.
    index_of: Vec<usize>,
}

impl DepthOrder {
    /// Sorts `0..len` once and builds the slot/position maps.
    pub fn new(len: usize, key: impl Fn(usize) -> f64) -> Self {
        let mut order: Vec<usize> = (0..len).collect();
        order.sort_by(|&a, &b| key(a).total_cmp(&key(b)));

        let mut index_of = vec![0; len];
        for (position, &slot) in order.iter().enumerate() {
            index_of[slot] = position;
        }

        Self { order, index_of }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Current position of a slot in the ordering.
    pub fn position_of(&self, slot: usize) -> usize {
        self.index_of[slot]
    }

    /// Slot with the smallest key.
    pub fn front(&self) -> Option<usize> {
        self.order.first().copied()
    }

    /// Slot with the largest key.
    pub fn back(&self) -> Option<usize> {
        self.order.last().copied()
    }

    /// Slots in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    /// Slots in descending key order.
    pub fn iter_rev(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().rev().copied()
    }

    /// Restores the ordering after `slot`'s key changed.
    ///
    /// Bubbles the slot left while its predecessor's key is larger, then
    /// right symmetrically, updating both maps on every swap. Returns the
    /// number of swaps performed, which equals the slot's displacement.
    ///
    /// Precondition: `slot` was part of the ordering at construction.
    pub fn fix_sort_order(&mut self, slot: usize, key: impl Fn(usize) -> f64) -> usize {
        debug_assert!(slot < self.index_of.len(), "slot never registered");

        let mut position = self.index_of[slot];
        let mut swaps = 0;

        while position > 0 && key(self.order[position]) < key(self.order[position - 1]) {
            self.swap(position - 1, position);
            position -= 1;
            swaps += 1;
        }
        while position + 1 < self.order.len()
            && key(self.order[position + 1]) < key(self.order[position])
        {
            self.swap(position, position + 1);
            position += 1;
            swaps += 1;
        }

        swaps
    }

    /// Full order scan; test/debug helper, not used on the frame path.
    pub fn is_sorted(&self, key: impl Fn(usize) -> f64) -> bool {
        self.order
            .windows(2)
            .all(|pair| key(pair[0]) <= key(pair[1]))
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.order.swap(a, b);
        self.index_of[self.order[a]] = a;
        self.index_of[self.order[b]] = b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn construction_sorts_and_maps() {
        let keys = [3.0, 1.0, 2.0];
        let order = DepthOrder::new(3, |slot| keys[slot]);
        assert_eq!(order.iter().collect::<Vec<_>>(), vec![1, 2, 0]);
        assert_eq!(order.position_of(0), 2);
        assert_eq!(order.position_of(1), 0);
        assert_eq!(order.front(), Some(1));
        assert_eq!(order.back(), Some(0));
    }

    #[test]
    fn swap_count_equals_displacement() {
        // Slot 4's key drops below exactly three neighbors.
        let mut keys = [0.0, 1.0, 2.0, 3.0, 4.0];
        let mut order = DepthOrder::new(5, |slot| keys[slot]);

        keys[4] = 0.5;
        let swaps = order.fix_sort_order(4, |slot| keys[slot]);
        assert_eq!(swaps, 3);
        assert_eq!(order.iter().collect::<Vec<_>>(), vec![0, 4, 1, 2, 3]);
        assert!(order.is_sorted(|slot| keys[slot]));
    }

    #[test]
    fn fix_is_noop_when_key_unchanged() {
        let keys = [1.0, 2.0, 3.0];
        let mut order = DepthOrder::new(3, |slot| keys[slot]);
        assert_eq!(order.fix_sort_order(1, |slot| keys[slot]), 0);
    }

    #[test]
    fn bubbles_right_on_key_increase() {
        let mut keys = [0.0, 1.0, 2.0, 3.0];
        let mut order = DepthOrder::new(4, |slot| keys[slot]);

        keys[0] = 2.5;
        let swaps = order.fix_sort_order(0, |slot| keys[slot]);
        assert_eq!(swaps, 2);
        assert_eq!(order.iter().collect::<Vec<_>>(), vec![1, 2, 0, 3]);
    }

    #[test]
    fn randomized_perturbations_keep_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut keys: Vec<f64> = (0..100).map(|_| rng.gen_range(-300.0..300.0)).collect();
        let mut order = DepthOrder::new(keys.len(), |slot| keys[slot]);

        for _ in 0..1_000 {
            let slot = rng.gen_range(0..keys.len());
            keys[slot] += rng.gen_range(-15.0..15.0);
            order.fix_sort_order(slot, |slot| keys[slot]);
            assert!(order.is_sorted(|slot| keys[slot]));
        }
        assert_eq!(order.len(), 100);
    }
}
