//! Arena coordinates.
//!
//! The arena is a diamond of side 28. Rows 0..=13 belong to us, rows
//! 14..=27 to the opponent. The two flanks are mirror images across the
//! vertical line x = 13.5.

/// Width of the arena along its widest row.
pub const ARENA_SIZE: i32 = 28;

/// Number of rows on each player's half.
pub const HALF_ARENA: i32 = ARENA_SIZE / 2;

/// A single arena coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// Reflects the cell across x = 13.5.
    pub const fn mirrored(self) -> Cell {
        Cell::new(ARENA_SIZE - 1 - self.x, self.y)
    }

    /// The cell one row closer to the opponent. Slots keep their
    /// supporting barrier here.
    pub const fn above(self) -> Cell {
        Cell::new(self.x, self.y + 1)
    }

    /// Returns true if the cell lies inside the diamond.
    pub fn in_arena(self) -> bool {
        if self.y < 0 || self.y >= ARENA_SIZE {
            return false;
        }
        if self.y < HALF_ARENA {
            self.x >= HALF_ARENA - 1 - self.y && self.x <= HALF_ARENA + self.y
        } else {
            self.x >= self.y - HALF_ARENA && self.x <= ARENA_SIZE + HALF_ARENA - 1 - self.y
        }
    }

    /// Returns true if the cell is inside the arena on our half.
    pub fn is_friendly(self) -> bool {
        self.in_arena() && self.y < HALF_ARENA
    }

    /// Returns true if the cell is on one of our two deployment edges.
    pub fn is_friendly_edge(self) -> bool {
        self.is_friendly()
            && (self.x == HALF_ARENA - 1 - self.y || self.x == HALF_ARENA + self.y)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

/// One of the two mirrored halves of our side of the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flank {
    Left,
    Right,
}

impl Flank {
    pub const BOTH: [Flank; 2] = [Flank::Left, Flank::Right];

    /// Maps a left-flank layout coordinate onto this flank.
    pub const fn place(self, cell: Cell) -> Cell {
        match self {
            Flank::Left => cell,
            Flank::Right => cell.mirrored(),
        }
    }

    /// Maps a list of left-flank layout coordinates onto this flank.
    pub fn place_all(self, cells: &[Cell]) -> Vec<Cell> {
        cells.iter().map(|c| self.place(*c)).collect()
    }

    /// Lowercase name for logs.
    pub const fn name(self) -> &'static str {
        match self {
            Flank::Left => "left",
            Flank::Right => "right",
        }
    }
}
