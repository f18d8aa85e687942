//! Per-zone reinforcement policies.
//!
//! Each zone works toward a fixed target configuration: every slot holds
//! an upgraded turret with an upgraded wall directly above it. A policy
//! visits its slots in random order and spends whatever the allowance
//! covers, re-reading the allowance before every step.

mod barrier_line;
mod chokepoint;
mod slanted_gate;

pub use barrier_line::BarrierLine;
pub use chokepoint::Chokepoint;
pub use slanted_gate::SlantedGate;

use rand::rngs::SmallRng;

use crate::board::{Cell, UnitKind};
use crate::host::{Budget, Host};

/// A zone's reinforcement state machine.
pub trait RegionPolicy {
    /// Short zone name for logs.
    fn name(&self) -> &'static str;

    /// Spends toward the zone's target configuration. Returns true if at
    /// least one command succeeded.
    fn reinforce(&mut self, budget: &mut Budget<'_>, rng: &mut SmallRng) -> bool;

    /// True once the zone has reached its target configuration.
    fn is_final_form(&self, host: &dyn Host) -> bool;
}

/// True if `cell` holds an upgraded structure.
pub(crate) fn is_upgraded(host: &dyn Host, cell: Cell) -> bool {
    host.occupant(cell).is_some_and(|o| o.upgraded)
}

/// A slot is finished when it and its supporting wall are upgraded.
pub(crate) fn slot_complete(host: &dyn Host, slot: Cell) -> bool {
    is_upgraded(host, slot) && is_upgraded(host, slot.above())
}

/// Standard slot step: upgrade the turret, then upgrade the wall, then
/// build a wall and turret pair if the slot is bare.
///
/// Each step is gated on a fresh allowance read and does not depend on
/// the previous step succeeding.
pub(crate) fn reinforce_slot(budget: &mut Budget<'_>, slot: Cell) -> bool {
    let barrier = slot.above();
    let turret = budget.occupant(slot);
    let wall = budget.occupant(barrier);
    let mut acted = false;

    if let Some(t) = turret {
        if !t.upgraded && budget.allowance() >= budget.upgrade_cost(t.kind).structure {
            acted |= budget.upgrade(slot);
        }
    }

    if let Some(w) = wall {
        if !w.upgraded && budget.allowance() >= budget.upgrade_cost(w.kind).structure {
            acted |= budget.upgrade(barrier);
        }
    }

    if turret.is_none() && wall.is_none() {
        let pair =
            budget.cost(UnitKind::Wall).structure + budget.cost(UnitKind::Turret).structure;
        if budget.allowance() >= pair {
            acted |= budget.build(UnitKind::Wall, barrier);
            acted |= budget.build(UnitKind::Turret, slot);
        }
    }

    acted
}
