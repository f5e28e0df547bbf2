use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Board setup for a new game, including how many safe cells get auto-seeded.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
    pub auto_seed: CellCount,
}

impl Difficulty {
    pub const fn easy() -> Self {
        Self {
            rows: 8,
            cols: 8,
            mines: 10,
            auto_seed: 4,
        }
    }

    pub const fn medium() -> Self {
        Self {
            rows: 12,
            cols: 12,
            mines: 24,
            auto_seed: 7,
        }
    }

    pub const fn hard() -> Self {
        Self {
            rows: 16,
            cols: 16,
            mines: 45,
            auto_seed: 10,
        }
    }

    pub fn config(&self) -> Result<GameConfig> {
        GameConfig::new((self.rows, self.cols), self.mines)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::easy()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    Easy,
    Medium,
    Hard,
}

impl DifficultyTier {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    pub const fn difficulty(self) -> Difficulty {
        match self {
            Self::Easy => Difficulty::easy(),
            Self::Medium => Difficulty::medium(),
            Self::Hard => Difficulty::hard(),
        }
    }
}

impl From<DifficultyTier> for Difficulty {
    fn from(tier: DifficultyTier) -> Self {
        tier.difficulty()
    }
}

impl FromStr for DifficultyTier {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(GameError::UnknownDifficulty)
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
