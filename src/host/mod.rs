//! The boundary to the game host.
//!
//! The host owns the occupancy grid and both currencies. Everything the
//! strategy knows about the board is read through `Host`, and every
//! mutation goes through a fallible command. `Budget` wraps a host for the
//! duration of one turn and is the only way strategy code spends.

pub mod state;

pub use state::{Placement, TurnState};

use crate::board::{Cell, Cost, Currency, Occupant, UnitKind};

/// Read and command surface of the game host.
///
/// Commands never panic or error. A failed command spends nothing and
/// changes nothing.
pub trait Host {
    /// Turn number, starting at 0.
    fn turn(&self) -> u32;

    /// Our structure at `cell`, if any.
    fn occupant(&self, cell: Cell) -> Option<Occupant>;

    /// Live balance. Stale as soon as any command is issued.
    fn balance(&self, currency: Currency) -> u32;

    /// Structure balance minus the current savings floor.
    fn allowance(&self) -> u32;

    /// Sets the structure points held back from `allowance`.
    fn set_savings(&mut self, floor: u32);

    /// Price of building `kind`.
    fn cost(&self, kind: UnitKind) -> Cost;

    /// Price of upgrading a placed `kind`.
    fn upgrade_cost(&self, kind: UnitKind) -> Cost;

    /// Places one structure. Returns false if nothing was placed.
    fn build(&mut self, kind: UnitKind, cell: Cell) -> bool;

    /// Upgrades the structure at `cell`. Returns false if nothing changed.
    fn upgrade(&mut self, cell: Cell) -> bool;

    /// Deploys up to `count` mobile units. Returns how many were placed.
    fn deploy(&mut self, kind: UnitKind, cell: Cell, count: u32) -> u32;
}

/// A single spend request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Build { kind: UnitKind, cell: Cell },
    Upgrade { cell: Cell },
    Deploy { kind: UnitKind, cell: Cell, count: u32 },
}

impl Command {
    /// The currency this command draws from.
    pub fn currency(self) -> Currency {
        match self {
            Command::Build { .. } | Command::Upgrade { .. } => Currency::Structure,
            Command::Deploy { .. } => Currency::Mobile,
        }
    }
}

/// Result of one spend attempt, with the balance re-read afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spend {
    /// Units placed or upgraded; 0 means the command failed.
    pub placed: u32,
    /// Allowance for structure commands, mobile balance for deploys.
    pub remaining: u32,
}

impl Spend {
    pub fn succeeded(&self) -> bool {
        self.placed > 0
    }
}

/// Turn-scoped spending handle.
///
/// Never caches a balance: every read goes to the host, and every spend
/// reports the balance the host holds after the command.
pub struct Budget<'h> {
    host: &'h mut dyn Host,
    issued: usize,
}

impl<'h> Budget<'h> {
    /// Wraps `host` for one turn.
    pub fn new(host: &'h mut dyn Host) -> Self {
        Budget { host, issued: 0 }
    }

    /// Read-only view of the host, for trackers.
    pub fn host(&self) -> &dyn Host {
        &*self.host
    }

    pub fn turn(&self) -> u32 {
        self.host.turn()
    }

    pub fn occupant(&self, cell: Cell) -> Option<Occupant> {
        self.host.occupant(cell)
    }

    pub fn balance(&self, currency: Currency) -> u32 {
        self.host.balance(currency)
    }

    pub fn allowance(&self) -> u32 {
        self.host.allowance()
    }

    pub fn set_savings(&mut self, floor: u32) {
        self.host.set_savings(floor);
    }

    pub fn cost(&self, kind: UnitKind) -> Cost {
        self.host.cost(kind)
    }

    pub fn upgrade_cost(&self, kind: UnitKind) -> Cost {
        self.host.upgrade_cost(kind)
    }

    /// Attempts one command and returns the re-read balance.
    pub fn attempt(&mut self, command: Command) -> Spend {
        let placed = match command {
            Command::Build { kind, cell } => u32::from(self.host.build(kind, cell)),
            Command::Upgrade { cell } => u32::from(self.host.upgrade(cell)),
            Command::Deploy { kind, cell, count } => self.host.deploy(kind, cell, count),
        };
        if placed > 0 {
            self.issued += 1;
        }
        let remaining = match command.currency() {
            Currency::Structure => self.host.allowance(),
            Currency::Mobile => self.host.balance(Currency::Mobile),
        };
        Spend { placed, remaining }
    }

    /// Builds one structure; true on success.
    pub fn build(&mut self, kind: UnitKind, cell: Cell) -> bool {
        self.attempt(Command::Build { kind, cell }).succeeded()
    }

    /// Upgrades the structure at `cell`; true on success.
    pub fn upgrade(&mut self, cell: Cell) -> bool {
        self.attempt(Command::Upgrade { cell }).succeeded()
    }

    /// Deploys up to `count` mobile units and returns how many went out.
    pub fn deploy(&mut self, kind: UnitKind, cell: Cell, count: u32) -> u32 {
        if count == 0 {
            return 0;
        }
        self.attempt(Command::Deploy { kind, cell, count }).placed
    }

    /// Number of successful commands issued through this handle.
    pub fn issued(&self) -> usize {
        self.issued
    }
}
