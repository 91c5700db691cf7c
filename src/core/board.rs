use crate::core::entity::Position;

/// Surface type of a board row, used by the renderer to pick a backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terrain {
    Water,
    Stone,
    Grass,
}

/// Playfield geometry in grid units. Shared read-only by the engine and by
/// the factories that spawn entities at legal edge positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Board {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Board {
    /// The classic 5x6 field: a water row up top, three stone lanes, two
    /// grass rows at the bottom.
    pub const CLASSIC: Board = Board {
        top: 0.0,
        left: 0.0,
        right: 4.0,
        bottom: 5.0,
    };

    pub fn cols(&self) -> usize {
        (self.right - self.left) as usize + 1
    }

    pub fn rows(&self) -> usize {
        (self.bottom - self.top) as usize + 1
    }

    /// Terrain by row: water at the top edge, grass on the last two rows,
    /// stone lanes in between.
    pub fn terrain(&self, row: usize) -> Terrain {
        if row == 0 {
            Terrain::Water
        } else if row + 2 >= self.rows() {
            Terrain::Grass
        } else {
            Terrain::Stone
        }
    }

    /// Rows that hazards may travel (the stone lanes).
    pub fn lanes(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.rows().saturating_sub(3)
    }

    /// Where the player starts and returns to on every reset: middle
    /// column, bottom row.
    pub fn spawn(&self) -> Position {
        Position::new(((self.left + self.right) / 2.0).floor(), self.bottom)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::CLASSIC
    }
}
