//! Min-heap entry for [`BinaryHeap`](std::collections::BinaryHeap).

use std::cmp::Ordering;

/// A `(score, item)` pair whose ordering is reversed, so that a max-heap of
/// `MinScored` pops the smallest score first.
///
/// Ties on the score pop the smallest `item` first, which keeps Dijkstra and
/// Prim deterministic for a given graph. Scores that are not comparable (NaN)
/// are treated as equal.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MinScored<K, T>(pub K, pub T);

impl<K: PartialOrd, T: Ord> PartialEq for MinScored<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: PartialOrd, T: Ord> Eq for MinScored<K, T> {}

impl<K: PartialOrd, T: Ord> PartialOrd for MinScored<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: PartialOrd, T: Ord> Ord for MinScored<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .partial_cmp(&self.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.1.cmp(&self.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn test_pops_smallest_score_first() {
        let mut heap = BinaryHeap::new();
        heap.push(MinScored(5, 'a'));
        heap.push(MinScored(1, 'b'));
        heap.push(MinScored(3, 'c'));

        let order: Vec<i32> = std::iter::from_fn(|| heap.pop().map(|s| s.0)).collect();
        assert_eq!(order, vec![1, 3, 5]);
    }

    #[test]
    fn test_ties_pop_smallest_item() {
        let mut heap = BinaryHeap::new();
        heap.push(MinScored(2.0, 9usize));
        heap.push(MinScored(2.0, 4usize));
        heap.push(MinScored(2.0, 7usize));

        assert_eq!(heap.pop().unwrap().1, 4);
        assert_eq!(heap.pop().unwrap().1, 7);
        assert_eq!(heap.pop().unwrap().1, 9);
    }
}
