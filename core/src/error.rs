use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must have at least one row and one column")]
    EmptyBoard,
    #[error("Board must have at least one mine")]
    NoMines,
    #[error("Too many mines, at least one safe cell is required")]
    TooManyMines,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Saved state does not match its board")]
    InconsistentState,
    #[error("Unknown difficulty tier")]
    UnknownDifficulty,
}

pub type Result<T> = core::result::Result<T, GameError>;
