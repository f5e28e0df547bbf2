use ndarray::Array2;
use rand::Rng;

use crate::*;
pub use random::*;

mod random;

pub trait GridGenerator {
    fn generate(self, config: GameConfig) -> Result<Grid>;
}

/// Generates a grid using `rng` for mine placement.
///
/// Fails fast on a config that could not produce a playable board.
pub fn generate_with_rng<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Grid> {
    config.validate()?;
    let grid = Grid::from_mine_mask(place_mines(config, rng))?;

    // double check mine count
    if grid.mine_count() != config.mines {
        log::warn!(
            "Generated grid count mismatch, actual: {}, requested: {}",
            grid.mine_count(),
            config.mines
        );
    }
    Ok(grid)
}

/// Places exactly `config.mines` mines by rejection sampling uniformly random cells.
///
/// Requires a validated config, with fewer mines than cells the loop always terminates.
pub fn place_mines<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Array2<bool> {
    let (rows, cols) = config.size;
    let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());
    let mut placed: CellCount = 0;
    let mut draws: u64 = 0;

    while placed < config.mines {
        let coords: Coord2 = (rng.random_range(0..rows), rng.random_range(0..cols));
        draws += 1;
        let cell = &mut mine_mask[coords.to_nd_index()];
        if !*cell {
            *cell = true;
            placed += 1;
        }
    }

    log::trace!("Placed {} mines in {} draws", placed, draws);
    mine_mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn brute_force_hint(grid: &Grid, coords: Coord2) -> Hint {
        let mut distances: Vec<Hint> = grid
            .mine_coords()
            .map(|mine| distance_sq(coords, mine))
            .collect();
        distances.sort_unstable();
        match distances.as_slice() {
            [single] => *single,
            [first, second, ..] => first * second,
            [] => 0,
        }
    }

    #[test]
    fn places_exact_mine_count() {
        let mut rng = SmallRng::seed_from_u64(7);
        for (size, mines) in [((1, 2), 1), ((3, 3), 8), ((8, 8), 10), ((16, 30), 99)] {
            let config = GameConfig::new(size, mines).unwrap();
            let grid = generate_with_rng(config, &mut rng).unwrap();

            assert_eq!(grid.size(), size);
            assert_eq!(grid.mine_count(), mines);
            assert_eq!(grid.mine_coords().count(), usize::from(mines));
        }
    }

    #[test]
    fn hints_match_sorted_distances() {
        let mut rng = SmallRng::seed_from_u64(1234);
        for mines in [1, 2, 5, 20] {
            let config = GameConfig::new((6, 7), mines).unwrap();
            let grid = generate_with_rng(config, &mut rng).unwrap();

            for coords in grid.safe_coords() {
                let hint = grid.hint(coords);
                assert_eq!(hint, brute_force_hint(&grid, coords), "at {:?}", coords);
                assert!(hint > 0);
            }
        }
    }

    #[test]
    fn almost_full_board_terminates() {
        let mut rng = SmallRng::seed_from_u64(99);
        let config = GameConfig::new((5, 5), 24).unwrap();
        let grid = generate_with_rng(config, &mut rng).unwrap();

        assert_eq!(grid.safe_coords().count(), 1);
    }

    #[test]
    fn rejects_invalid_config() {
        let mut rng = SmallRng::seed_from_u64(0);
        let config = GameConfig::new_unchecked((2, 2), 4);

        assert_eq!(
            generate_with_rng(config, &mut rng),
            Err(GameError::TooManyMines)
        );
    }

    #[test]
    fn same_seed_same_grid() {
        let config = GameConfig::new((9, 9), 10).unwrap();
        let a = RandomGridGenerator::new(5).generate(config).unwrap();
        let b = RandomGridGenerator::new(5).generate(config).unwrap();

        assert_eq!(a, b);
    }
}
