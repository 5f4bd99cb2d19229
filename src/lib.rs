//! Tic-tac-toe mini-app library.
//!
//! A terminal-hosted rendition of a messaging-platform mini-app game: a
//! human plays X against an automated O at three difficulty levels, or two
//! humans share the keyboard.
//!
//! # Architecture
//!
//! - **Game**: board, rules, and the per-game state machine ([`Round`])
//! - **AI**: the three move-selection policies ([`Difficulty`])
//! - **Schedule**: the cancellable display delay before the computer reply
//! - **Identity / Host**: cosmetic platform collaborators with graceful
//!   fallbacks; their failure never blocks gameplay
//! - **TUI**: thin rendering adapter over the round state

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod ai;
pub mod cli;
pub mod game;
pub mod host;
pub mod identity;
pub mod schedule;
pub mod settings;
pub mod simulate;
pub mod tui;

// Crate-level exports - game types
pub use game::{Board, Mark, Outcome, Position, Round, Square, evaluate};

// Crate-level exports - move selection
pub use ai::{Difficulty, select_move};

// Crate-level exports - scheduling
pub use schedule::{MoveScheduler, ScheduledMove};

// Crate-level exports - collaborators
pub use host::{HostError, HostWindow, NativeWindow};
pub use identity::{GuestIdentity, IdentityError, IdentityProvider, MiniAppIdentity, Profile};

// Crate-level exports - session settings
pub use settings::{GameMode, Settings};
