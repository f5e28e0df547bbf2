use alloc::vec::Vec;
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// One game over a generated grid: per-cell reveal/flag state and the game status.
///
/// Once the status is final the session no longer changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SessionParts")]
pub struct GameSession {
    grid: Grid,
    board: Array2<CellMark>,
    revealed_count: CellCount,
    flags_placed: CellCount,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
}

impl GameSession {
    pub fn new(grid: Grid) -> Self {
        let size = grid.size();
        Self {
            grid,
            board: Array2::default(size.to_nd_index()),
            revealed_count: 0,
            flags_placed: 0,
            status: Default::default(),
            triggered_mine: None,
        }
    }

    /// Creates a session and opens up to `count` random safe cells before the first move.
    pub fn with_auto_seed<R: Rng + ?Sized>(grid: Grid, count: CellCount, rng: &mut R) -> Self {
        let mut session = Self::new(grid);
        session.auto_seed(count, rng);
        session
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    /// Number of safe cells revealed so far.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flags_placed(&self) -> CellCount {
        self.flags_placed
    }

    /// Mine count minus flags placed, negative when the player over-flags.
    pub fn mines_remaining(&self) -> isize {
        (self.grid.mine_count() as isize) - (self.flags_placed as isize)
    }

    /// Mine that ended a lost game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_mark(&self, coords: Coord2) -> Option<CellMark> {
        self.grid
            .contains(coords)
            .then(|| self.board[coords.to_nd_index()])
    }

    pub fn cell_state(&self, coords: Coord2) -> Option<CellState> {
        let mark = self.cell_mark(coords)?;
        Some(CellState {
            is_mine: self.grid.contains_mine(coords),
            revealed: mark.is_revealed(),
            flagged: mark.is_flagged(),
            hint: self.grid.hint(coords),
        })
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if self.is_finished() || self.cell_mark(coords) != Some(CellMark::Hidden) {
            return RevealOutcome::NoOp;
        }

        if self.grid.contains_mine(coords) {
            self.board[coords.to_nd_index()] = CellMark::Revealed;
            self.triggered_mine = Some(coords);
            log::debug!("Hit mine at {:?}", coords);
            self.end_game(false);
            return RevealOutcome::HitMine;
        }

        self.flood_reveal(coords);

        if self.revealed_count == self.grid.safe_cell_count() {
            self.end_game(true);
            RevealOutcome::Won
        } else {
            RevealOutcome::Opened
        }
    }

    /// Opens `start` and keeps opening around every zero-hint cell reached.
    ///
    /// Mines, flagged and revealed cells stop the fill.
    fn flood_reveal(&mut self, start: Coord2) {
        let mut to_visit = Vec::from([start]);

        while let Some(coords) = to_visit.pop() {
            if self.board[coords.to_nd_index()] != CellMark::Hidden
                || self.grid.contains_mine(coords)
            {
                continue;
            }

            self.board[coords.to_nd_index()] = CellMark::Revealed;
            self.revealed_count += 1;

            let hint = self.grid.hint(coords);
            log::trace!("Opened cell at {:?}, hint: {}", coords, hint);

            if hint == 0 {
                to_visit.extend(self.grid.iter_neighbors(coords).filter(|&pos| {
                    self.board[pos.to_nd_index()] == CellMark::Hidden
                        && !self.grid.contains_mine(pos)
                }));
            }
        }
    }

    /// Flips the flag on a hidden cell, returns whether the cell is flagged afterwards.
    pub fn toggle_flag(&mut self, coords: Coord2) -> bool {
        let Some(mark) = self.cell_mark(coords) else {
            return false;
        };
        if self.is_finished() {
            return mark.is_flagged();
        }

        match mark {
            CellMark::Hidden => {
                self.board[coords.to_nd_index()] = CellMark::Flagged;
                self.flags_placed += 1;
                true
            }
            CellMark::Flagged => {
                self.board[coords.to_nd_index()] = CellMark::Hidden;
                self.flags_placed -= 1;
                false
            }
            CellMark::Revealed => false,
        }
    }

    /// Reveals up to `count` distinct hidden safe cells picked uniformly at random.
    ///
    /// Seeding every safe cell wins the game before the player moves.
    pub fn auto_seed<R: Rng + ?Sized>(&mut self, count: CellCount, rng: &mut R) -> RevealOutcome {
        let mut candidates: Vec<Coord2> = self
            .grid
            .safe_coords()
            .filter(|&coords| self.board[coords.to_nd_index()] == CellMark::Hidden)
            .collect();
        let mut outcome = RevealOutcome::NoOp;

        for _ in 0..count {
            if self.is_finished() || candidates.is_empty() {
                break;
            }
            let coords = candidates.swap_remove(rng.random_range(0..candidates.len()));
            log::debug!("Auto-seeding cell at {:?}", coords);
            outcome = outcome | self.reveal(coords);
        }

        outcome
    }

    fn end_game(&mut self, won: bool) {
        if self.status.is_finished() {
            return;
        }

        self.status = if won {
            GameStatus::Won
        } else {
            GameStatus::Lost
        };
        log::debug!(
            "Game ended: {:?}, {} of {} safe cells revealed",
            self.status,
            self.revealed_count,
            self.grid.safe_cell_count()
        );
        self.reveal_mines();
    }

    /// Shows every mine once the game is over, no propagation happens from them.
    fn reveal_mines(&mut self) {
        for coords in self.grid.mine_coords() {
            self.board[coords.to_nd_index()] = CellMark::Revealed;
        }
    }
}

/// Unchecked serialized form of a [`GameSession`].
#[derive(Deserialize)]
struct SessionParts {
    grid: Grid,
    board: Array2<CellMark>,
    revealed_count: CellCount,
    flags_placed: CellCount,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
}

impl TryFrom<SessionParts> for GameSession {
    type Error = GameError;

    fn try_from(parts: SessionParts) -> Result<Self> {
        let SessionParts {
            grid,
            board,
            revealed_count,
            flags_placed,
            status,
            triggered_mine,
        } = parts;

        let (rows, cols) = grid.size();
        if board.dim() != (usize::from(rows), usize::from(cols)) {
            return Err(GameError::InvalidBoardShape);
        }

        let mut revealed_safe: CellCount = 0;
        let mut flagged: CellCount = 0;
        for coords in grid.cell_coords() {
            match (board[coords.to_nd_index()], grid.contains_mine(coords)) {
                (CellMark::Revealed, false) => revealed_safe += 1,
                // mines only show once the game is over
                (CellMark::Revealed, true) if !status.is_finished() => {
                    return Err(GameError::InconsistentState);
                }
                (CellMark::Flagged, _) => flagged += 1,
                _ => {}
            }
        }

        let won = revealed_safe == grid.safe_cell_count();
        let consistent = revealed_safe == revealed_count
            && flagged <= flags_placed
            && won == (status == GameStatus::Won)
            && match (status, triggered_mine) {
                (GameStatus::Lost, Some(coords)) => grid.contains(coords) && grid.contains_mine(coords),
                (GameStatus::Lost, None) => false,
                (_, triggered) => triggered.is_none(),
            };
        if !consistent {
            return Err(GameError::InconsistentState);
        }

        Ok(Self {
            grid,
            board,
            revealed_count,
            flags_placed,
            status,
            triggered_mine,
        })
    }
}
