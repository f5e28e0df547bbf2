use serde::{Deserialize, Serialize};

use crate::Hint;

/// Mutable per-cell state tracked by a session.
///
/// A cell is never flagged and revealed at the same time, revealing clears the flag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellMark {
    Hidden,
    Flagged,
    Revealed,
}

impl CellMark {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}

impl Default for CellMark {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Full state of a single cell, including hidden information.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellState {
    pub is_mine: bool,
    pub revealed: bool,
    pub flagged: bool,
    /// Meaningless for mines.
    pub hint: Hint,
}
