//! Property-based tests for the allocation lottery and zone bookkeeping.
//!
//! Run with: cargo test --release prop_

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use rampart::board::{layout, Cell, Flank, UnitKind};
use rampart::config::UnitCatalog;
use rampart::defense::{draw, RegionTracker, WeightedQueue, TICKET_RESOLUTION};
use rampart::host::{Host, TurnState};

/// Queues of tagged items `(queue, position)` with arbitrary weights.
fn queues_strategy() -> impl Strategy<Value = Vec<(usize, f32)>> {
    prop::collection::vec((0usize..30, prop_oneof![Just(0.0f32), 0.0f32..5.0]), 0..5)
}

fn build_queues(shape: &[(usize, f32)]) -> Vec<WeightedQueue<(usize, usize)>> {
    shape
        .iter()
        .enumerate()
        .map(|(q, &(len, weight))| {
            WeightedQueue::new((0..len).map(|i| (q, i)).collect(), weight)
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Every item appears exactly once.
    #[test]
    fn prop_draw_is_a_permutation(shape in queues_strategy(), seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut merged = draw(build_queues(&shape), TICKET_RESOLUTION, &mut rng);
        let total: usize = shape.iter().map(|(len, _)| len).sum();
        prop_assert_eq!(merged.len(), total);
        merged.sort();
        merged.dedup();
        prop_assert_eq!(merged.len(), total);
    }

    /// Items of one queue keep their relative order when weights are set.
    #[test]
    fn prop_draw_preserves_queue_order(shape in queues_strategy(), seed in any::<u64>()) {
        prop_assume!(shape.iter().any(|(len, w)| *len > 0 && *w > 0.0));
        let mut rng = SmallRng::seed_from_u64(seed);
        let merged = draw(build_queues(&shape), TICKET_RESOLUTION, &mut rng);
        for q in 0..shape.len() {
            let positions: Vec<usize> = merged
                .iter()
                .filter(|(qq, _)| *qq == q)
                .map(|(_, i)| *i)
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]), "queue {} reordered", q);
        }
    }

    /// Tiny resolutions still return every item.
    #[test]
    fn prop_draw_low_resolution(
        shape in queues_strategy(),
        resolution in 0u32..8,
        seed in any::<u64>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let merged = draw(build_queues(&shape), resolution, &mut rng);
        let total: usize = shape.iter().map(|(len, _)| len).sum();
        prop_assert_eq!(merged.len(), total);
    }

    /// Relative damage stays zero on an empty baseline and the repair list
    /// only ever names empty cells.
    #[test]
    fn prop_tracker_repairs_only_empty_cells(
        losses in prop::collection::vec(any::<bool>(), 8),
        hits in prop::collection::vec(0.0f32..200.0, 8),
    ) {
        let cells = layout::barrier_line_cells(Flank::Left);
        let mut state = TurnState::new(UnitCatalog::default(), 4, 0, 0);
        let mut tracker = RegionTracker::new(cells.clone());
        tracker.update(&state);
        prop_assert_eq!(tracker.damage_taken().relative, 0.0);

        for (i, &cell) in cells.iter().enumerate() {
            let kind = if i % 2 == 0 { UnitKind::Turret } else { UnitKind::Wall };
            state.place_new(kind, cell);
        }
        tracker.end_turn(&state);

        for (i, &cell) in cells.iter().enumerate() {
            if losses[i] {
                state.remove(cell);
            } else {
                state.damage(cell, hits[i]);
            }
        }
        tracker.update(&state);

        for repair in tracker.repairs() {
            prop_assert!(state.occupant(repair.cell).is_none());
        }
        let empty: Vec<Cell> = cells
            .iter()
            .copied()
            .filter(|c| state.occupant(*c).is_none())
            .collect();
        prop_assert_eq!(tracker.repairs().len(), empty.len());
        let damage = tracker.damage_taken();
        prop_assert!(damage.absolute >= 0.0);
        prop_assert!(damage.relative >= 0.0 && damage.relative <= 1.0 + 1e-4);
    }
}
