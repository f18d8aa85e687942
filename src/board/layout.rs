//! Fixed defensive layouts.
//!
//! All coordinates are given for the left flank; the right flank is the
//! mirror image. Each zone is a fixed set of cells owned by one tracker
//! for the whole match.

use super::cell::{Cell, Flank};

/// Ground origin for the left flank's mobile units.
pub const LEFT_HOME: Cell = Cell::new(13, 0);

/// Ground origin for the right flank's mobile units.
pub const RIGHT_HOME: Cell = Cell::new(14, 0);

/// Left-flank edge cell where patrols enter the chokepoint approach.
pub const FORWARD_POST: Cell = Cell::new(7, 6);

/// Slanted-gate slot left open for our own units to pass through.
pub const GATE_GAP: Cell = Cell::new(11, 9);

/// Top-left corner of the barrier line.
const BARRIER_LINE_ORIGIN: Cell = Cell::new(5, 13);
const BARRIER_LINE_LENGTH: i32 = 4;

/// First slot of the slanted gate.
const GATE_ORIGIN: Cell = Cell::new(9, 11);
const GATE_LENGTH: i32 = 5;

/// Top-right corner of the chokepoint triangle.
const CHOKEPOINT_ORIGIN: Cell = Cell::new(4, 13);
const CHOKEPOINT_DEPTH: i32 = 5;
const CHOKEPOINT_ANCHOR_LENGTH: i32 = 3;

/// Lowest cell of the production diamond; the diamond grows up and left.
const FARM_ORIGIN: Cell = Cell::new(13, 2);
const FARM_WIDTH: i32 = 3;
const FARM_HEIGHT: i32 = 5;

/// Home anchor of a flank.
pub const fn home(flank: Flank) -> Cell {
    match flank {
        Flank::Left => LEFT_HOME,
        Flank::Right => RIGHT_HOME,
    }
}

/// Forward patrol post of a flank.
pub const fn forward_post(flank: Flank) -> Cell {
    flank.place(FORWARD_POST)
}

/// Two rows of four cells: the slot row and the barrier row above it.
pub fn barrier_line_cells(flank: Flank) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(8);
    for i in 0..BARRIER_LINE_LENGTH {
        for j in 0..2 {
            cells.push(Cell::new(BARRIER_LINE_ORIGIN.x + i, BARRIER_LINE_ORIGIN.y - j));
        }
    }
    flank.place_all(&cells)
}

/// Turret slots of the barrier line, left to right.
pub fn barrier_line_slots(flank: Flank) -> Vec<Cell> {
    let slots: Vec<Cell> = (0..BARRIER_LINE_LENGTH)
        .map(|i| Cell::new(BARRIER_LINE_ORIGIN.x + i, BARRIER_LINE_ORIGIN.y - 1))
        .collect();
    flank.place_all(&slots)
}

/// The diagonal run of slots with their supporting barriers.
pub fn slanted_gate_cells(flank: Flank) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(2 * GATE_LENGTH as usize);
    for slot in slanted_gate_slots(Flank::Left) {
        cells.push(slot);
        cells.push(slot.above());
    }
    flank.place_all(&cells)
}

/// Turret slots of the slanted gate, gap included.
pub fn slanted_gate_slots(flank: Flank) -> Vec<Cell> {
    let slots: Vec<Cell> = (0..GATE_LENGTH)
        .map(|i| Cell::new(GATE_ORIGIN.x + i, GATE_ORIGIN.y - i))
        .collect();
    flank.place_all(&slots)
}

/// Gate slot kept open for our own units.
pub const fn gate_gap(flank: Flank) -> Cell {
    flank.place(GATE_GAP)
}

/// Triangle of cells wedged into the corner.
pub fn chokepoint_cells(flank: Flank) -> Vec<Cell> {
    let mut cells = Vec::new();
    for i in 0..CHOKEPOINT_DEPTH {
        for j in 0..CHOKEPOINT_DEPTH - i {
            cells.push(Cell::new(CHOKEPOINT_ORIGIN.x - i, CHOKEPOINT_ORIGIN.y - j));
        }
    }
    flank.place_all(&cells)
}

/// The two turret slots of the chokepoint.
pub fn chokepoint_slots(flank: Flank) -> Vec<Cell> {
    flank.place_all(&[Cell::new(4, 12), Cell::new(3, 10)])
}

/// Corner walls that are always rebuilt and upgraded first.
pub fn chokepoint_anchor_walls(flank: Flank) -> Vec<Cell> {
    let anchors: Vec<Cell> = (0..CHOKEPOINT_ANCHOR_LENGTH)
        .map(|i| Cell::new(i, CHOKEPOINT_ORIGIN.y - i))
        .collect();
    flank.place_all(&anchors)
}

/// Extra chokepoint wall bought once the anchors are upgraded.
pub const fn chokepoint_optional_wall(flank: Flank) -> Cell {
    flank.place(Cell::new(3, 13))
}

/// Production cells for both flanks, interleaved left/right in
/// planting order.
pub fn farm_cells() -> Vec<Cell> {
    let mut cells = Vec::with_capacity(2 * (FARM_WIDTH * FARM_HEIGHT) as usize);
    for y in 0..FARM_HEIGHT {
        for x in 0..FARM_WIDTH {
            let cell = Cell::new(FARM_ORIGIN.x - x, FARM_ORIGIN.y + y + x);
            cells.push(cell);
            cells.push(cell.mirrored());
        }
    }
    cells
}
