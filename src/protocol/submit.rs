//! Turn submission encoding.
//!
//! A turn is submitted as two JSON lines: the build stack (structure
//! spawns and upgrades in issue order) and the deploy stack (one entry per
//! mobile unit). Each entry is `[shorthand, x, y]`.

use std::io::Write;

use crate::config::UnitCatalog;
use crate::host::{Placement, TurnState};

/// The two lines sent back to the host for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub build: String,
    pub deploy: String,
}

impl Submission {
    /// Encodes both command stacks of a played turn.
    pub fn from_state(state: &TurnState) -> Result<Self, serde_json::Error> {
        let catalog = state.catalog();
        Ok(Submission {
            build: encode_stack(catalog, state.build_stack())?,
            deploy: encode_stack(catalog, state.deploy_stack())?,
        })
    }

    /// Writes both lines and flushes.
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.build)?;
        writeln!(out, "{}", self.deploy)?;
        out.flush()
    }
}

/// Encodes a stack as a JSON array of `[shorthand, x, y]` entries.
pub fn encode_stack(
    catalog: &UnitCatalog,
    stack: &[Placement],
) -> Result<String, serde_json::Error> {
    let entries: Vec<(&str, i32, i32)> = stack
        .iter()
        .map(|placement| match *placement {
            Placement::Spawn(kind, cell) => (catalog.shorthand(kind), cell.x, cell.y),
            Placement::Upgrade(cell) => (catalog.upgrade_shorthand.as_str(), cell.x, cell.y),
        })
        .collect();
    serde_json::to_string(&entries)
}
