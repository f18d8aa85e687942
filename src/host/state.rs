//! Local model of one turn.
//!
//! Mirrors what the host will accept: occupancy on our half, both
//! balances, and the command stacks issued so far. Commands are checked
//! and applied immediately so later reads in the same turn see them.

use std::collections::HashMap;

use crate::board::{Cell, Cost, Currency, Occupant, UnitKind};
use crate::config::UnitCatalog;

use super::Host;

/// What a stack entry asks the host to do at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Spawn(UnitKind, Cell),
    Upgrade(Cell),
}

/// Occupancy, balances, and issued commands for a single turn.
#[derive(Debug, Clone)]
pub struct TurnState {
    catalog: UnitCatalog,
    turn: u32,
    structure: u32,
    mobile: u32,
    savings: u32,
    grid: HashMap<Cell, Occupant>,
    build_stack: Vec<Placement>,
    deploy_stack: Vec<Placement>,
}

impl TurnState {
    /// Empty board at `turn` with the given balances.
    pub fn new(catalog: UnitCatalog, turn: u32, structure: u32, mobile: u32) -> Self {
        TurnState {
            catalog,
            turn,
            structure,
            mobile,
            savings: 0,
            grid: HashMap::new(),
            build_stack: Vec::new(),
            deploy_stack: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &UnitCatalog {
        &self.catalog
    }

    /// Records a structure reported by the host. Does not spend.
    pub fn place(&mut self, cell: Cell, occupant: Occupant) {
        self.grid.insert(cell, occupant);
    }

    /// Records a stock structure at full health. Does not spend.
    pub fn place_new(&mut self, kind: UnitKind, cell: Cell) {
        let health = self.catalog.health(kind);
        self.place(cell, Occupant::new(kind, health));
    }

    /// Marks the structure at `cell` upgraded, as reported by the host.
    pub fn mark_upgraded(&mut self, cell: Cell) {
        if let Some(occ) = self.grid.get_mut(&cell) {
            occ.upgraded = true;
        }
    }

    /// Applies damage; a structure at or below zero health is removed.
    pub fn damage(&mut self, cell: Cell, amount: f32) {
        let destroyed = match self.grid.get_mut(&cell) {
            Some(occ) => {
                occ.health -= amount;
                occ.health <= 0.0
            }
            None => false,
        };
        if destroyed {
            self.grid.remove(&cell);
        }
    }

    /// Removes the structure at `cell` without refund.
    pub fn remove(&mut self, cell: Cell) -> Option<Occupant> {
        self.grid.remove(&cell)
    }

    /// Starts the next turn from this board: clears the stacks and the
    /// savings floor and sets fresh balances.
    pub fn next_turn(&mut self, structure: u32, mobile: u32) {
        self.turn += 1;
        self.structure = structure;
        self.mobile = mobile;
        self.savings = 0;
        self.build_stack.clear();
        self.deploy_stack.clear();
    }

    /// Every structure on the board, in no particular order.
    pub fn structures(&self) -> impl Iterator<Item = (&Cell, &Occupant)> {
        self.grid.iter()
    }

    /// Builds and upgrades in the order they were issued.
    pub fn build_stack(&self) -> &[Placement] {
        &self.build_stack
    }

    /// Mobile deployments, one entry per unit.
    pub fn deploy_stack(&self) -> &[Placement] {
        &self.deploy_stack
    }

    fn affordable(&self, cost: Cost) -> bool {
        self.structure >= cost.structure && self.mobile >= cost.mobile
    }

    /// Units at `cost` that both balances cover, capped at `count`.
    fn affordable_count(&self, cost: Cost, count: u32) -> u32 {
        [Currency::Structure, Currency::Mobile]
            .into_iter()
            .filter_map(|currency| match cost.in_currency(currency) {
                0 => None,
                price => Some(self.balance(currency) / price),
            })
            .fold(count, u32::min)
    }

    fn charge(&mut self, cost: Cost) {
        self.structure -= cost.structure;
        self.mobile -= cost.mobile;
    }
}

impl Host for TurnState {
    fn turn(&self) -> u32 {
        self.turn
    }

    fn occupant(&self, cell: Cell) -> Option<Occupant> {
        self.grid.get(&cell).copied()
    }

    fn balance(&self, currency: Currency) -> u32 {
        match currency {
            Currency::Structure => self.structure,
            Currency::Mobile => self.mobile,
        }
    }

    fn allowance(&self) -> u32 {
        self.structure.saturating_sub(self.savings)
    }

    fn set_savings(&mut self, floor: u32) {
        self.savings = floor;
    }

    fn cost(&self, kind: UnitKind) -> Cost {
        self.catalog.cost(kind)
    }

    fn upgrade_cost(&self, kind: UnitKind) -> Cost {
        self.catalog.upgrade_cost(kind)
    }

    fn build(&mut self, kind: UnitKind, cell: Cell) -> bool {
        if !kind.is_structure() || !cell.is_friendly() || self.grid.contains_key(&cell) {
            return false;
        }
        let cost = self.catalog.cost(kind);
        if !self.affordable(cost) {
            return false;
        }
        self.charge(cost);
        self.place_new(kind, cell);
        self.build_stack.push(Placement::Spawn(kind, cell));
        true
    }

    fn upgrade(&mut self, cell: Cell) -> bool {
        let kind = match self.grid.get(&cell) {
            Some(occ) if !occ.upgraded => occ.kind,
            _ => return false,
        };
        let cost = self.catalog.upgrade_cost(kind);
        if !self.affordable(cost) {
            return false;
        }
        self.charge(cost);
        let health = self.catalog.upgraded_health(kind);
        if let Some(occ) = self.grid.get_mut(&cell) {
            occ.upgraded = true;
            occ.health = health;
        }
        self.build_stack.push(Placement::Upgrade(cell));
        true
    }

    fn deploy(&mut self, kind: UnitKind, cell: Cell, count: u32) -> u32 {
        if !kind.is_mobile() || !cell.is_friendly_edge() || self.grid.contains_key(&cell) {
            return 0;
        }
        let cost = self.catalog.cost(kind);
        let placed = self.affordable_count(cost, count);
        for _ in 0..placed {
            self.charge(cost);
            self.deploy_stack.push(Placement::Spawn(kind, cell));
        }
        placed
    }
}
