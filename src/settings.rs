//! Session settings: user-configurable preferences for the game.

use crate::ai::Difficulty;

/// Who sits across the board.
///
/// Defaults to [`GameMode::VsComputer`]; the human always plays X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum GameMode {
    /// The human plays X against the automated O.
    #[default]
    VsComputer,
    /// Two humans share the keyboard.
    TwoPlayer,
}

impl GameMode {
    /// Returns the display label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Self::VsComputer => "Player vs AI",
            Self::TwoPlayer => "Player vs Player",
        }
    }

    /// Toggles between the two modes.
    pub fn toggle(self) -> Self {
        match self {
            Self::VsComputer => Self::TwoPlayer,
            Self::TwoPlayer => Self::VsComputer,
        }
    }
}

/// User-configurable settings for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    /// Opponent mode for each game.
    pub mode: GameMode,
    /// Difficulty of the automated opponent.
    pub difficulty: Difficulty,
}

impl Settings {
    /// Creates settings with the given mode and difficulty.
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self { mode, difficulty }
    }
}
