use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, PartialEq)]
struct QueueEntry<Id> {
    node: Id,
    cost: f64,
}

impl<Id: Ord> Eq for QueueEntry<Id> {}

// Reversed so the max-heap pops the lowest cost, then the lowest id.
impl<Id: Ord> Ord for QueueEntry<Id> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl<Id: Ord> PartialOrd for QueueEntry<Id> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority frontier with lazy invalidation: outdated entries stay in
/// the heap and are dropped when popped.
#[derive(Debug, Clone)]
pub struct DistanceFrontier<Id> {
    heap: BinaryHeap<QueueEntry<Id>>,
}

impl<Id: Ord> DistanceFrontier<Id> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, node: Id, cost: f64) {
        self.heap.push(QueueEntry { node, cost });
    }

    pub fn pop_min<F>(&mut self, mut is_stale: F) -> Option<(Id, f64)>
    where
        F: FnMut(&Id, f64) -> bool,
    {
        while let Some(entry) = self.heap.pop() {
            if is_stale(&entry.node, entry.cost) {
                continue;
            }
            return Some((entry.node, entry.cost));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_cost_then_lowest_id() {
        let mut frontier = DistanceFrontier::new();
        frontier.push(5, 3.0);
        frontier.push(4, 1.0);
        frontier.push(2, 1.0);
        frontier.push(9, 0.5);

        let order: Vec<u32> = std::iter::from_fn(|| frontier.pop_min(|_, _| false))
            .map(|(node, _)| node)
            .collect();
        assert_eq!(order, vec![9, 2, 4, 5]);
    }

    #[test]
    fn stale_entries_are_skipped() {
        let mut frontier = DistanceFrontier::new();
        frontier.push(1, 8.0);
        frontier.push(1, 3.0);
        frontier.push(2, 5.0);

        let best_of_one = 3.0;
        let mut popped = Vec::new();
        while let Some(entry) = frontier.pop_min(|node, cost| *node == 1 && cost > best_of_one) {
            popped.push(entry);
        }
        assert_eq!(popped, vec![(1, 3.0), (2, 5.0)]);
    }
}
