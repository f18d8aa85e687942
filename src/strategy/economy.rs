//! Production farm management.
//!
//! Factories are planted in a fixed order across both flanks. A pass is
//! given a structure amount, converts it into a number of factory-priced
//! actions, and always spends those on upgrades before new construction.

use log::debug;

use crate::board::{layout, Cell, UnitKind};
use crate::host::{Budget, Host};

/// Farm cells split by what the next action there would be.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FarmSurvey {
    pub upgradable: Vec<Cell>,
    pub empty: Vec<Cell>,
}

#[derive(Debug, Clone)]
pub struct Economy {
    farm: Vec<Cell>,
}

impl Default for Economy {
    fn default() -> Self {
        Self::new()
    }
}

impl Economy {
    /// Economy over the stock farm layout.
    pub fn new() -> Self {
        Economy {
            farm: layout::farm_cells(),
        }
    }

    /// Farm cells in planting order.
    pub fn farm(&self) -> &[Cell] {
        &self.farm
    }

    /// Walks the farm in planting order.
    pub fn examine(&self, host: &dyn Host) -> FarmSurvey {
        let mut survey = FarmSurvey::default();
        for &cell in &self.farm {
            match host.occupant(cell) {
                None => survey.empty.push(cell),
                Some(occ) if !occ.upgraded => survey.upgradable.push(cell),
                Some(_) => {}
            }
        }
        survey
    }

    /// Spends up to `available / factory cost` actions on the farm,
    /// upgrades first. Returns the number of successful commands.
    pub fn expand(&self, budget: &mut Budget<'_>, available: u32) -> usize {
        let price = budget.cost(UnitKind::Factory).structure.max(1);
        let mut actions = (available / price) as usize;
        if actions == 0 {
            return 0;
        }

        let survey = self.examine(budget.host());
        let mut done = 0;

        let upgrades = actions.min(survey.upgradable.len());
        for &cell in &survey.upgradable[..upgrades] {
            if budget.upgrade(cell) {
                done += 1;
            }
        }
        actions -= upgrades;

        for &cell in survey.empty.iter().take(actions) {
            if budget.build(UnitKind::Factory, cell) {
                done += 1;
            }
        }

        debug!("farm: {} of {} actions landed", done, available / price);
        done
    }
}
