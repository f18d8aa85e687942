//! One flank's three zones.
//!
//! Runs the per-turn cycle for a barrier line, a slanted gate, and a
//! chokepoint: refresh the trackers, snapshot their damage, and merge
//! their repair lists into one queue weighted by how badly each zone was
//! hit.

use log::debug;
use rand::rngs::SmallRng;

use crate::board::{layout, Flank};
use crate::host::{Budget, Host};

use super::lottery::{self, WeightedQueue};
use super::policy::{BarrierLine, Chokepoint, RegionPolicy, SlantedGate};
use super::tracker::{Damage, RegionTracker, Repair};

/// Which damage figure to aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageMeasure {
    Absolute,
    Relative,
}

/// A tracker paired with the policy that reinforces the same cells.
pub struct Zone {
    pub tracker: RegionTracker,
    pub policy: Box<dyn RegionPolicy>,
}

impl Zone {
    /// Pairs a tracker with the policy that reinforces the same cells.
    pub fn new(tracker: RegionTracker, policy: Box<dyn RegionPolicy>) -> Self {
        Zone { tracker, policy }
    }

    pub fn name(&self) -> &'static str {
        self.policy.name()
    }
}

/// Controller for one flank.
pub struct SideController {
    flank: Flank,
    zones: [Zone; 3],
    repair_queue: Vec<Repair>,
    damage: [Damage; 3],
    ticket_resolution: u32,
}

impl SideController {
    /// Builds the standard three-zone layout for `flank`.
    pub fn new(flank: Flank, ticket_resolution: u32) -> Self {
        let zones = [
            Zone::new(
                RegionTracker::new(layout::barrier_line_cells(flank)),
                Box::new(BarrierLine::new(flank)),
            ),
            Zone::new(
                RegionTracker::new(layout::slanted_gate_cells(flank)),
                Box::new(SlantedGate::new(flank)),
            ),
            Zone::new(
                RegionTracker::new(layout::chokepoint_cells(flank)),
                Box::new(Chokepoint::new(flank)),
            ),
        ];
        Self::with_zones(flank, zones, ticket_resolution)
    }

    /// Controller over caller-supplied zones.
    pub fn with_zones(flank: Flank, zones: [Zone; 3], ticket_resolution: u32) -> Self {
        SideController {
            flank,
            zones,
            repair_queue: Vec::new(),
            damage: [Damage::default(); 3],
            ticket_resolution,
        }
    }

    /// Which half of the board this controller defends.
    pub fn flank(&self) -> Flank {
        self.flank
    }

    /// Zones in reinforcement priority order.
    pub fn zones(&self) -> &[Zone; 3] {
        &self.zones
    }

    /// Refreshes every tracker. Call before issuing any command this turn.
    pub fn update(&mut self, host: &dyn Host) {
        for zone in &mut self.zones {
            zone.tracker.update(host);
        }
    }

    /// Absorbs structures built or upgraded earlier this turn.
    pub fn update_units(&mut self, host: &dyn Host) {
        for zone in &mut self.zones {
            zone.tracker.update_units(host);
        }
    }

    /// Snapshots each zone's damage. Call once per turn, after `update`
    /// and before any repair is bought.
    pub fn query_damage(&mut self) {
        for (slot, zone) in self.damage.iter_mut().zip(&self.zones) {
            *slot = zone.tracker.damage_taken();
        }
    }

    /// Per-zone damage from the last `query_damage`.
    pub fn damage(&self) -> &[Damage; 3] {
        &self.damage
    }

    /// Merges the zones' repair lists, weighted by relative damage.
    pub fn get_repairs(&mut self, rng: &mut SmallRng) {
        let queues = self
            .zones
            .iter()
            .zip(&self.damage)
            .map(|(zone, damage)| {
                WeightedQueue::new(zone.tracker.repairs().to_vec(), damage.relative)
            })
            .collect();
        self.repair_queue = lottery::draw(queues, self.ticket_resolution, rng);
        debug!(
            "{} flank: {} repairs queued, cost {}",
            self.flank.name(),
            self.repair_queue.len(),
            self.get_repair_cost()
        );
    }

    /// Repairs merged by the last `get_repairs`.
    pub fn repair_queue(&self) -> &[Repair] {
        &self.repair_queue
    }

    /// Structure points needed for every zone's repairs.
    pub fn get_repair_cost(&self) -> u32 {
        self.zones.iter().map(|z| z.tracker.repair_cost()).sum()
    }

    /// Damage summed over the three zones.
    pub fn total_damage(&self, measure: DamageMeasure) -> f32 {
        self.damage
            .iter()
            .map(|d| match measure {
                DamageMeasure::Absolute => d.absolute,
                DamageMeasure::Relative => d.relative,
            })
            .sum()
    }

    /// True once every zone reached its target configuration.
    pub fn is_final_form(&self, host: &dyn Host) -> bool {
        self.zones.iter().all(|z| z.policy.is_final_form(host))
    }

    /// Runs each unfinished zone's policy once, most damaged zones more
    /// likely to go first. Returns true if anything was bought.
    pub fn reinforce(&mut self, budget: &mut Budget<'_>, rng: &mut SmallRng) -> bool {
        let queues = (0..self.zones.len())
            .map(|idx| WeightedQueue::new(vec![idx], self.damage[idx].relative))
            .collect();
        let order = lottery::draw(queues, self.ticket_resolution, rng);

        let mut acted = false;
        for idx in order {
            let zone = &mut self.zones[idx];
            if zone.policy.is_final_form(budget.host()) {
                continue;
            }
            if zone.policy.reinforce(budget, rng) {
                debug!("{} {} reinforced", self.flank.name(), zone.name());
                acted = true;
            }
        }
        acted
    }

    /// Commits this turn's health as next turn's baseline.
    pub fn end_turn(&mut self, host: &dyn Host) {
        for zone in &mut self.zones {
            zone.tracker.end_turn(host);
        }
    }
}
