//! Board representation.
//!
//! Coordinates, flanks, unit kinds, and the fixed zone layouts the
//! defense is built around.

pub mod cell;
pub mod layout;
pub mod unit;

pub use cell::{Cell, Flank, ARENA_SIZE, HALF_ARENA};
pub use unit::{Cost, Currency, Occupant, UnitKind, ALL_UNIT_KINDS};
