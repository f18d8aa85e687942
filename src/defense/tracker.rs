//! Per-zone health bookkeeping across turns.
//!
//! A tracker owns a fixed set of cells and remembers the last occupant
//! it saw in each. Comparing that memory against the host at the start
//! of a turn yields the zone's health loss since the previous turn and
//! the list of structures that need rebuilding.

use std::collections::HashMap;

use crate::board::{Cell, Occupant, UnitKind};
use crate::host::Host;

/// A structure to rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repair {
    pub cell: Cell,
    pub kind: UnitKind,
}

/// Health lost since the last committed baseline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Damage {
    pub absolute: f32,
    /// Share of the baseline that was lost; 0 when the baseline is 0.
    pub relative: f32,
}

/// Occupancy snapshot and aggregate health of one zone.
#[derive(Debug, Clone)]
pub struct RegionTracker {
    region: Vec<Cell>,
    units: HashMap<Cell, Occupant>,
    /// Destroyed and not yet rebuilt.
    lost: HashMap<Cell, UnitKind>,
    old_health: f32,
    cur_health: f32,
    repairs: Vec<Repair>,
    repair_cost: u32,
}

impl RegionTracker {
    /// Tracker over `region` with an empty baseline.
    pub fn new(region: Vec<Cell>) -> Self {
        RegionTracker {
            region,
            units: HashMap::new(),
            lost: HashMap::new(),
            old_health: 0.0,
            cur_health: 0.0,
            repairs: Vec::new(),
            repair_cost: 0,
        }
    }

    /// Compares every cell against the host and rebuilds the repair list.
    ///
    /// Call at turn start, before any command is issued. Cells that went
    /// from empty to occupied are left for `update_units`.
    pub fn update(&mut self, host: &dyn Host) {
        self.repairs.clear();
        self.repair_cost = 0;

        for &cell in &self.region {
            match (self.units.get(&cell).copied(), host.occupant(cell)) {
                (Some(old), None) => {
                    self.cur_health -= old.health;
                    self.units.remove(&cell);
                    self.lost.insert(cell, old.kind);
                }
                (Some(old), Some(new)) => {
                    self.cur_health -= old.health - new.health;
                    self.units.insert(cell, new);
                }
                (None, _) => {}
            }

            if host.occupant(cell).is_none() {
                if let Some(&kind) = self.lost.get(&cell) {
                    self.repair_cost += host.cost(kind).structure;
                    self.repairs.push(Repair { cell, kind });
                }
            }
        }
    }

    /// Absorbs cells that were built or upgraded since the last call.
    pub fn update_units(&mut self, host: &dyn Host) {
        for &cell in &self.region {
            let Some(new) = host.occupant(cell) else {
                continue;
            };
            match self.units.get(&cell) {
                None => {
                    self.cur_health += new.health;
                    self.lost.remove(&cell);
                }
                Some(old) => {
                    self.cur_health += new.health - old.health;
                }
            }
            self.units.insert(cell, new);
        }
    }

    /// Absorbs this turn's construction and commits the new baseline.
    pub fn end_turn(&mut self, host: &dyn Host) {
        self.update_units(host);
        self.old_health = self.cur_health;
    }

    /// Health lost since the last `end_turn`.
    pub fn damage_taken(&self) -> Damage {
        let absolute = self.old_health - self.cur_health;
        let relative = if self.old_health > 0.0 {
            absolute / self.old_health
        } else {
            0.0
        };
        Damage { absolute, relative }
    }

    /// Destroyed structures found by the last `update`, in region order.
    pub fn repairs(&self) -> &[Repair] {
        &self.repairs
    }

    /// Structure points needed to rebuild every listed repair.
    pub fn repair_cost(&self) -> u32 {
        self.repair_cost
    }

    /// Aggregate health committed by the last `end_turn`.
    pub fn baseline_health(&self) -> f32 {
        self.old_health
    }

    /// Aggregate health as last observed.
    pub fn current_health(&self) -> f32 {
        self.cur_health
    }
}
