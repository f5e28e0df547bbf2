use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::types::array_size;
use crate::*;

/// What a player may see of a session, hidden mines and hints are left out.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibleCell {
    Hidden,
    Flagged,
    Mine,
    Hint(Hint),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub status: GameStatus,
    pub mines_remaining: isize,
    pub cells: Array2<VisibleCell>,
}

impl PlayerView {
    pub fn from_session(session: &GameSession) -> Self {
        let grid = session.grid();
        let mut cells = Array2::from_elem(session.size().to_nd_index(), VisibleCell::Hidden);

        for coords in grid.cell_coords() {
            let Some(mark) = session.cell_mark(coords) else {
                continue;
            };
            cells[coords.to_nd_index()] = match mark {
                CellMark::Hidden => VisibleCell::Hidden,
                CellMark::Flagged => VisibleCell::Flagged,
                CellMark::Revealed if grid.contains_mine(coords) => VisibleCell::Mine,
                CellMark::Revealed => VisibleCell::Hint(grid.hint(coords)),
            };
        }

        Self {
            status: session.status(),
            mines_remaining: session.mines_remaining(),
            cells,
        }
    }

    pub fn size(&self) -> Coord2 {
        array_size(&self.cells).unwrap_or_default()
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<VisibleCell> {
        self.cells.get(coords.to_nd_index()).copied()
    }
}

impl fmt::Display for VisibleCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hidden => f.write_str("#"),
            Self::Flagged => f.write_str("F"),
            Self::Mine => f.write_str("*"),
            Self::Hint(hint) => write!(f, "{}", hint),
        }
    }
}

/// One line per row, cells separated by a single space.
impl fmt::Display for PlayerView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let mut first = true;
            for cell in row {
                if !first {
                    f.write_str(" ")?;
                }
                first = false;
                write!(f, "{}", cell)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
