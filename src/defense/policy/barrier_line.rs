//! Straight run of slots along the front row.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::board::{layout, Cell, Flank};
use crate::host::{Budget, Host};

use super::{reinforce_slot, slot_complete, RegionPolicy};

/// Four slots in a line, each backed by a wall. Target: every slot an
/// upgraded turret under an upgraded wall.
#[derive(Debug, Clone)]
pub struct BarrierLine {
    slots: Vec<Cell>,
}

impl BarrierLine {
    /// Barrier line for `flank`.
    pub fn new(flank: Flank) -> Self {
        BarrierLine {
            slots: layout::barrier_line_slots(flank),
        }
    }
}

impl RegionPolicy for BarrierLine {
    fn name(&self) -> &'static str {
        "barrier-line"
    }

    fn reinforce(&mut self, budget: &mut Budget<'_>, rng: &mut SmallRng) -> bool {
        self.slots.shuffle(rng);
        let mut acted = false;
        for &slot in &self.slots {
            acted |= reinforce_slot(budget, slot);
        }
        acted
    }

    fn is_final_form(&self, host: &dyn Host) -> bool {
        self.slots.iter().all(|s| slot_complete(host, *s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::UnitKind;
    use crate::config::UnitCatalog;
    use crate::host::TurnState;
    use rand::SeedableRng;

    #[test]
    fn fills_every_slot_given_enough_budget() {
        let mut state = TurnState::new(UnitCatalog::default(), 4, 100, 0);
        let mut policy = BarrierLine::new(Flank::Left);
        let mut rng = SmallRng::seed_from_u64(1);

        assert!(policy.reinforce(&mut Budget::new(&mut state), &mut rng));
        for slot in layout::barrier_line_slots(Flank::Left) {
            assert_eq!(state.occupant(slot).unwrap().kind, UnitKind::Turret);
            assert_eq!(state.occupant(slot.above()).unwrap().kind, UnitKind::Wall);
        }
        assert!(!policy.is_final_form(&state));

        assert!(policy.reinforce(&mut Budget::new(&mut state), &mut rng));
        assert!(policy.is_final_form(&state));
        assert!(!policy.reinforce(&mut Budget::new(&mut state), &mut rng));
    }

    #[test]
    fn slot_order_varies_with_the_seed() {
        let first_pair = |seed| {
            let mut state = TurnState::new(UnitCatalog::default(), 4, 3, 0);
            let mut policy = BarrierLine::new(Flank::Right);
            policy.reinforce(
                &mut Budget::new(&mut state),
                &mut SmallRng::seed_from_u64(seed),
            );
            layout::barrier_line_slots(Flank::Right)
                .into_iter()
                .find(|s| state.occupant(*s).is_some())
        };
        let picks: std::collections::HashSet<Option<Cell>> = (0..32).map(first_pair).collect();
        assert!(picks.len() > 1, "slot order never changed");
        assert!(!picks.contains(&None));
    }
}
