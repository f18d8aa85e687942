//! Diagonal run of slots with a deliberate gap.
//!
//! The gap slot stays open so our own units can pass through the gate.
//! It is only filled in final form, which nothing in the turn loop
//! currently switches on.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::board::{layout, Cell, Flank};
use crate::host::{Budget, Host};

use super::{reinforce_slot, slot_complete, RegionPolicy};

#[derive(Debug, Clone)]
pub struct SlantedGate {
    slots: Vec<Cell>,
    gap: Cell,
    final_form: bool,
}

impl SlantedGate {
    /// Slanted gate for `flank`, gap open.
    pub fn new(flank: Flank) -> Self {
        SlantedGate {
            slots: layout::slanted_gate_slots(flank),
            gap: layout::gate_gap(flank),
            final_form: false,
        }
    }

    pub fn gap(&self) -> Cell {
        self.gap
    }

    /// True once the gap has been sealed.
    pub fn final_form(&self) -> bool {
        self.final_form
    }

    /// Includes the gap slot in future reinforcement.
    pub fn seal_gap(&mut self) {
        self.final_form = true;
    }

    fn skips(&self, slot: Cell) -> bool {
        !self.final_form && slot == self.gap
    }
}

impl RegionPolicy for SlantedGate {
    fn name(&self) -> &'static str {
        "slanted-gate"
    }

    fn reinforce(&mut self, budget: &mut Budget<'_>, rng: &mut SmallRng) -> bool {
        self.slots.shuffle(rng);
        let mut acted = false;
        for &slot in &self.slots {
            if self.skips(slot) {
                continue;
            }
            acted |= reinforce_slot(budget, slot);
        }
        acted
    }

    fn is_final_form(&self, host: &dyn Host) -> bool {
        self.slots
            .iter()
            .filter(|s| !self.skips(**s))
            .all(|s| slot_complete(host, *s))
    }
}
