use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Uniformly random generation from a caller-provided seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomGridGenerator {
    seed: u64,
}

impl RandomGridGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl GridGenerator for RandomGridGenerator {
    fn generate(self, config: GameConfig) -> Result<Grid> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let grid = generate_with_rng(config, &mut rng)?;
        log::debug!(
            "Generated {}x{} grid with {} mines from seed {}",
            config.size.0,
            config.size.1,
            config.mines,
            self.seed
        );
        Ok(grid)
    }
}
