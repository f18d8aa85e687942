//! Corner funnel with two turret slots.
//!
//! The anchor walls that close the corner are rebuilt and upgraded before
//! anything else. Turret slots then buy the most expensive combination of
//! steps the allowance covers, and a single optional wall is topped up
//! last.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::board::{layout, Cell, Flank, UnitKind};
use crate::host::{Budget, Host};

use super::{is_upgraded, slot_complete, RegionPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    BuildTurret,
    UpgradeTurret,
    BuildWall,
    UpgradeWall,
}

/// Combinations for an empty slot whose wall is standing.
const WALLED_TIERS: [&[Step]; 4] = [
    &[Step::BuildTurret, Step::UpgradeTurret, Step::UpgradeWall],
    &[Step::BuildTurret, Step::UpgradeTurret],
    &[Step::BuildTurret, Step::UpgradeWall],
    &[Step::BuildTurret],
];

/// Combinations for a slot with neither turret nor wall.
const BARE_TIERS: [&[Step]; 2] = [
    &[Step::BuildTurret, Step::UpgradeTurret, Step::BuildWall],
    &[Step::BuildTurret, Step::BuildWall],
];

#[derive(Debug, Clone)]
pub struct Chokepoint {
    slots: Vec<Cell>,
    anchor_walls: Vec<Cell>,
    optional_wall: Cell,
}

impl Chokepoint {
    /// Chokepoint for `flank`.
    pub fn new(flank: Flank) -> Self {
        Chokepoint {
            slots: layout::chokepoint_slots(flank),
            anchor_walls: layout::chokepoint_anchor_walls(flank),
            optional_wall: layout::chokepoint_optional_wall(flank),
        }
    }

    pub fn anchor_walls(&self) -> &[Cell] {
        &self.anchor_walls
    }

    pub fn optional_wall(&self) -> Cell {
        self.optional_wall
    }

    fn step_cost(budget: &Budget<'_>, step: Step) -> u32 {
        match step {
            Step::BuildTurret => budget.cost(UnitKind::Turret).structure,
            Step::UpgradeTurret => budget.upgrade_cost(UnitKind::Turret).structure,
            Step::BuildWall => budget.cost(UnitKind::Wall).structure,
            Step::UpgradeWall => budget.upgrade_cost(UnitKind::Wall).structure,
        }
    }

    fn run_step(budget: &mut Budget<'_>, slot: Cell, step: Step) -> bool {
        match step {
            Step::BuildTurret => budget.build(UnitKind::Turret, slot),
            Step::UpgradeTurret => budget.upgrade(slot),
            Step::BuildWall => budget.build(UnitKind::Wall, slot.above()),
            Step::UpgradeWall => budget.upgrade(slot.above()),
        }
    }

    /// Picks the priciest eligible combination the allowance covers.
    fn buy_tier(
        budget: &mut Budget<'_>,
        slot: Cell,
        tiers: &[&[Step]],
        wall_upgradable: bool,
    ) -> bool {
        let mut priced: Vec<(u32, &[Step])> = tiers
            .iter()
            .filter(|tier| wall_upgradable || !tier.contains(&Step::UpgradeWall))
            .map(|tier| {
                let cost = tier.iter().map(|s| Self::step_cost(budget, *s)).sum::<u32>();
                (cost, *tier)
            })
            .collect();
        priced.sort_by(|a, b| b.0.cmp(&a.0));

        let allowance = budget.allowance();
        let Some(&(_, steps)) = priced.iter().find(|(cost, _)| allowance >= *cost) else {
            return false;
        };
        let mut acted = false;
        for &step in steps {
            acted |= Self::run_step(budget, slot, step);
        }
        acted
    }

    fn reinforce_slot(budget: &mut Budget<'_>, slot: Cell) -> bool {
        let turret = budget.occupant(slot);
        let wall = budget.occupant(slot.above());

        match (turret, wall) {
            (Some(t), wall) => {
                let mut acted = false;
                if !t.upgraded && budget.allowance() >= budget.upgrade_cost(t.kind).structure {
                    acted |= budget.upgrade(slot);
                }
                match wall {
                    Some(w) if !w.upgraded => {
                        if budget.allowance() >= budget.upgrade_cost(w.kind).structure {
                            acted |= budget.upgrade(slot.above());
                        }
                    }
                    Some(_) => {}
                    None => {
                        if budget.allowance() >= budget.cost(UnitKind::Wall).structure {
                            acted |= budget.build(UnitKind::Wall, slot.above());
                        }
                    }
                }
                acted
            }
            (None, Some(w)) => Self::buy_tier(budget, slot, &WALLED_TIERS, !w.upgraded),
            (None, None) => Self::buy_tier(budget, slot, &BARE_TIERS, false),
        }
    }

    /// Rebuilds a missing wall or upgrades a standing one.
    fn maintain_wall(budget: &mut Budget<'_>, cell: Cell) -> bool {
        match budget.occupant(cell) {
            None => {
                budget.allowance() >= budget.cost(UnitKind::Wall).structure
                    && budget.build(UnitKind::Wall, cell)
            }
            Some(w) if !w.upgraded => {
                budget.allowance() >= budget.upgrade_cost(w.kind).structure
                    && budget.upgrade(cell)
            }
            Some(_) => false,
        }
    }
}

impl RegionPolicy for Chokepoint {
    fn name(&self) -> &'static str {
        "chokepoint"
    }

    fn reinforce(&mut self, budget: &mut Budget<'_>, rng: &mut SmallRng) -> bool {
        let mut acted = false;
        for &cell in &self.anchor_walls {
            acted |= Self::maintain_wall(budget, cell);
        }

        self.slots.shuffle(rng);
        for &slot in &self.slots {
            acted |= Self::reinforce_slot(budget, slot);
        }

        let cell = self.optional_wall;
        match budget.occupant(cell) {
            None => {
                let wall = budget.cost(UnitKind::Wall).structure;
                let upgrade = budget.upgrade_cost(UnitKind::Wall).structure;
                if budget.allowance() >= wall + upgrade {
                    acted |= budget.build(UnitKind::Wall, cell);
                    acted |= budget.upgrade(cell);
                } else if budget.allowance() >= wall {
                    acted |= budget.build(UnitKind::Wall, cell);
                }
            }
            Some(_) => acted |= Self::maintain_wall(budget, cell),
        }
        acted
    }

    fn is_final_form(&self, host: &dyn Host) -> bool {
        self.anchor_walls.iter().all(|c| is_upgraded(host, *c))
            && is_upgraded(host, self.optional_wall)
            && self.slots.iter().all(|s| slot_complete(host, *s))
    }
}
