//! Weighted, order-preserving merge of several queues.
//!
//! Each queue receives lottery tickets in proportion to its weight. The
//! tickets are shuffled and drawn one at a time; a ticket pops the next
//! item of its queue. The merged sequence therefore front-loads heavily
//! weighted queues without ever reordering items within a queue.

use rand::seq::SliceRandom;
use rand::Rng;

/// Default number of tickets handed out per draw.
pub const TICKET_RESOLUTION: u32 = 200;

/// A queue and its severity weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedQueue<T> {
    pub items: Vec<T>,
    pub weight: f32,
}

impl<T> WeightedQueue<T> {
    pub fn new(items: Vec<T>, weight: f32) -> Self {
        WeightedQueue { items, weight }
    }
}

/// Merges `queues` into one sequence containing every item exactly once.
///
/// Empty queues are dropped. When no remaining queue carries weight the
/// items are returned in uniformly random order. Negative and NaN weights
/// count as zero. Items left over once the tickets run out (only possible
/// when a queue is longer than its ticket share) are appended in queue
/// order.
pub fn draw<T, R: Rng + ?Sized>(
    queues: Vec<WeightedQueue<T>>,
    resolution: u32,
    rng: &mut R,
) -> Vec<T> {
    let kept: Vec<WeightedQueue<T>> = queues
        .into_iter()
        .filter(|q| !q.items.is_empty())
        .map(|q| WeightedQueue {
            weight: q.weight.max(0.0),
            items: q.items,
        })
        .collect();

    let total_weight: f32 = kept.iter().map(|q| q.weight).sum();
    if total_weight <= 0.0 {
        let mut merged: Vec<T> = kept.into_iter().flat_map(|q| q.items).collect();
        merged.shuffle(rng);
        return merged;
    }

    let total_items: usize = kept.iter().map(|q| q.items.len()).sum();
    let mut tickets: Vec<usize> = Vec::with_capacity(resolution as usize);
    for (idx, queue) in kept.iter().enumerate() {
        let share = (resolution as f32 * queue.weight / total_weight).floor() as usize;
        tickets.extend(std::iter::repeat(idx).take(share));
    }
    tickets.shuffle(rng);

    let mut drains: Vec<std::vec::IntoIter<T>> =
        kept.into_iter().map(|q| q.items.into_iter()).collect();
    let mut merged = Vec::with_capacity(total_items);
    for idx in tickets {
        if let Some(item) = drains[idx].next() {
            merged.push(item);
        }
        if merged.len() == total_items {
            return merged;
        }
    }
    for drain in drains {
        merged.extend(drain);
    }
    merged
}
