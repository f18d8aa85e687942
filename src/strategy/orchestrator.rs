//! The per-turn decision loop.
//!
//! Each turn both flanks are refreshed and priced. If the structure
//! balance covers every repair, all repairs are bought, the farm is
//! expanded, and the remainder reinforces the zones. Otherwise the two
//! repair queues are merged by severity and bought in order until the
//! first failure. Either way the turn then applies the savings cadence,
//! runs a capped farm pass, reinforces on the allowance, and dispatches
//! the mobile budget.

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::{Currency, Flank, UnitKind};
use crate::config::StrategyConfig;
use crate::defense::{lottery, DamageMeasure, Repair, SideController, WeightedQueue};
use crate::host::{Budget, Host};

use super::economy::Economy;
use super::mobile::{self, Dispatch};
use super::opening;

/// How the structure budget was handled this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnMode {
    Opening,
    FullRepair,
    Triage,
}

/// Summary of one played turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub turn: u32,
    pub mode: TurnMode,
    pub repairs: usize,
    pub commands: usize,
    pub dispatch: Dispatch,
}

/// Owns both flanks and the farm for the whole match.
pub struct Orchestrator {
    left: SideController,
    right: SideController,
    economy: Economy,
    config: StrategyConfig,
    rng: SmallRng,
}

impl Orchestrator {
    /// Fresh match state; all randomness derives from `seed`.
    pub fn new(config: StrategyConfig, seed: u64) -> Self {
        Orchestrator {
            left: SideController::new(Flank::Left, config.ticket_resolution),
            right: SideController::new(Flank::Right, config.ticket_resolution),
            economy: Economy::new(),
            config,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn side(&self, flank: Flank) -> &SideController {
        match flank {
            Flank::Left => &self.left,
            Flank::Right => &self.right,
        }
    }

    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    /// Plays one turn against `host`. Every command is issued before this
    /// returns; the caller submits afterwards.
    pub fn play_turn(&mut self, host: &mut dyn Host) -> TurnReport {
        let mut budget = Budget::new(host);
        let turn = budget.turn();

        let report = if turn < self.config.opening_turns
            && opening::play(&mut budget, &self.economy)
        {
            TurnReport {
                turn,
                mode: TurnMode::Opening,
                repairs: 0,
                commands: budget.issued(),
                dispatch: Dispatch::Idle,
            }
        } else {
            self.defend(&mut budget)
        };

        self.left.end_turn(budget.host());
        self.right.end_turn(budget.host());
        info!(
            "turn {}: {:?}, {} repairs, {} commands, {} mobile sent",
            report.turn,
            report.mode,
            report.repairs,
            report.commands,
            report.dispatch.sent()
        );
        report
    }

    fn defend(&mut self, budget: &mut Budget<'_>) -> TurnReport {
        let turn = budget.turn();
        for side in [&mut self.left, &mut self.right] {
            side.update(budget.host());
            side.query_damage();
            side.get_repairs(&mut self.rng);
        }
        let left_damage = self.left.total_damage(DamageMeasure::Relative);
        let right_damage = self.right.total_damage(DamageMeasure::Relative);
        let repair_cost = self.left.get_repair_cost() + self.right.get_repair_cost();
        debug!(
            "turn {}: damage left {:.3} right {:.3}, repair cost {}",
            turn, left_damage, right_damage, repair_cost
        );

        let (mode, repairs) = if budget.balance(Currency::Structure) >= repair_cost {
            let mut repaired = 0;
            for repair in self.left.repair_queue().iter().chain(self.right.repair_queue()) {
                if budget.build(repair.kind, repair.cell) {
                    repaired += 1;
                }
            }
            self.left.update_units(budget.host());
            self.right.update_units(budget.host());

            let available = budget.allowance();
            self.economy.expand(budget, available);
            self.reinforce(budget, left_damage, right_damage);
            (TurnMode::FullRepair, repaired)
        } else {
            let repaired = self.triage(budget, left_damage, right_damage);
            self.left.update_units(budget.host());
            self.right.update_units(budget.host());
            (TurnMode::Triage, repaired)
        };

        self.apply_savings(budget);
        let available = budget.allowance().min(self.config.factory_spend_cap);
        self.economy.expand(budget, available);
        self.reinforce(budget, left_damage, right_damage);

        let dispatch = mobile::dispatch(budget, &self.config, &mut self.rng);
        TurnReport {
            turn,
            mode,
            repairs,
            commands: budget.issued(),
            dispatch,
        }
    }

    /// Buys repairs from both flanks in severity order, stopping at the
    /// first one that fails.
    fn triage(&mut self, budget: &mut Budget<'_>, left_damage: f32, right_damage: f32) -> usize {
        let queues = vec![
            WeightedQueue::new(self.left.repair_queue().to_vec(), left_damage),
            WeightedQueue::new(self.right.repair_queue().to_vec(), right_damage),
        ];
        let order: Vec<Repair> =
            lottery::draw(queues, self.config.ticket_resolution, &mut self.rng);

        let mut repaired = 0;
        for repair in order {
            if !budget.build(repair.kind, repair.cell) {
                debug!("triage stopped at {} after {} repairs", repair.cell, repaired);
                break;
            }
            repaired += 1;
        }
        repaired
    }

    /// Holds back the savings floor on saving turns that cannot fund a
    /// factory.
    fn apply_savings(&self, budget: &mut Budget<'_>) {
        let period = self.config.savings_period.max(1);
        let factory = budget.cost(UnitKind::Factory).structure.max(1);
        let saving =
            budget.turn() % period == 0 && budget.balance(Currency::Structure) / factory < 1;
        budget.set_savings(if saving { self.config.savings_floor } else { 0 });
    }

    /// Reinforces both flanks, more damaged flank likelier first, until
    /// the allowance stops shrinking or every zone is finished.
    fn reinforce(&mut self, budget: &mut Budget<'_>, left_damage: f32, right_damage: f32) {
        loop {
            let before = budget.allowance();
            if before == 0 {
                return;
            }
            let queues = vec![
                WeightedQueue::new(vec![Flank::Left], left_damage),
                WeightedQueue::new(vec![Flank::Right], right_damage),
            ];
            let order = lottery::draw(queues, self.config.ticket_resolution, &mut self.rng);

            let mut acted = false;
            for flank in order {
                let side = match flank {
                    Flank::Left => &mut self.left,
                    Flank::Right => &mut self.right,
                };
                if side.is_final_form(budget.host()) {
                    continue;
                }
                acted |= side.reinforce(budget, &mut self.rng);
            }
            if !acted || budget.allowance() >= before {
                return;
            }
        }
    }
}
