use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::types::array_size;
use crate::*;

/// Immutable board produced once per game: mine layout plus hint values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridParts")]
pub struct Grid {
    mine_mask: Array2<bool>,
    hints: Array2<Hint>,
    mine_count: CellCount,
}

impl Grid {
    /// Builds a grid from a mine mask, computing every hint value.
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let mine_count = Self::checked_mine_count(&mine_mask)?;
        let hints = compute_hints(&mine_mask);
        Ok(Self {
            mine_mask,
            hints,
            mine_count,
        })
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    /// Builds a grid with caller-provided hint values instead of computed ones.
    ///
    /// Hints stored for mine cells are kept but never read.
    pub fn from_parts(mine_mask: Array2<bool>, hints: Array2<Hint>) -> Result<Self> {
        if mine_mask.dim() != hints.dim() {
            return Err(GameError::InvalidBoardShape);
        }
        let mine_count = Self::checked_mine_count(&mine_mask)?;
        Ok(Self {
            mine_mask,
            hints,
            mine_count,
        })
    }

    fn checked_mine_count(mine_mask: &Array2<bool>) -> Result<CellCount> {
        let size = array_size(mine_mask).ok_or(GameError::InvalidBoardShape)?;
        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .map_err(|_| GameError::TooManyMines)?;
        GameConfig::new(size, mine_count)?;
        Ok(mine_count)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        // shape is checked on construction
        array_size(&self.mine_mask).unwrap_or_default()
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let (rows, cols) = self.size();
        coords.0 < rows && coords.1 < cols
    }

    pub fn total_cells(&self) -> CellCount {
        self.game_config().total_cells()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.game_config().safe_cell_count()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn hint(&self, coords: Coord2) -> Hint {
        self.hints[coords.to_nd_index()]
    }

    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cell_coords().filter(|&coords| self[coords])
    }

    pub fn safe_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cell_coords().filter(|&coords| !self[coords])
    }

    pub(crate) fn cell_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }
}

/// Unchecked serialized form of a [`Grid`].
#[derive(Deserialize)]
struct GridParts {
    mine_mask: Array2<bool>,
    hints: Array2<Hint>,
    mine_count: CellCount,
}

impl TryFrom<GridParts> for Grid {
    type Error = GameError;

    fn try_from(parts: GridParts) -> Result<Self> {
        let grid = Self::from_parts(parts.mine_mask, parts.hints)?;
        if grid.mine_count != parts.mine_count {
            return Err(GameError::InconsistentState);
        }
        Ok(grid)
    }
}

impl Index<Coord2> for Grid {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

/// Product of the two smallest squared distances from `coords` to a mine.
///
/// With a single mine there is no second distance and the hint is the lone distance.
pub fn hint_value(coords: Coord2, mines: &[Coord2]) -> Hint {
    let mut nearest = Hint::MAX;
    let mut second = Hint::MAX;
    for &mine in mines {
        let dist = distance_sq(coords, mine);
        if dist < nearest {
            second = nearest;
            nearest = dist;
        } else if dist < second {
            second = dist;
        }
    }

    match mines.len() {
        0 => 0,
        1 => nearest,
        _ => nearest * second,
    }
}

/// Hint values for every safe cell of `mine_mask`, mines get 0.
pub fn compute_hints(mine_mask: &Array2<bool>) -> Array2<Hint> {
    let mines: Vec<Coord2> = mine_mask
        .indexed_iter()
        .filter(|&(_, &is_mine)| is_mine)
        .filter_map(|((row, col), _)| Some((row.try_into().ok()?, col.try_into().ok()?)))
        .collect();

    let mut hints = Array2::zeros(mine_mask.dim());
    for ((row, col), hint) in hints.indexed_iter_mut() {
        if mine_mask[[row, col]] {
            continue;
        }
        if let (Ok(row), Ok(col)) = (Coord::try_from(row), Coord::try_from(col)) {
            *hint = hint_value((row, col), &mines);
        }
    }
    hints
}
