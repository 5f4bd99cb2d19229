//! Application state and event handling.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::input;
use crate::game::{Mark, Outcome, Position, Round};
use crate::host::HostWindow;
use crate::identity::Profile;
use crate::schedule::{MoveScheduler, ScheduledMove};
use crate::settings::{GameMode, Settings};

/// Main application state.
///
/// Owns the round, the session settings, and the scheduler for the
/// automated reply. All mutation happens on the UI event loop; the
/// scheduler's task only reports back through the move channel.
pub struct App {
    round: Round,
    settings: Settings,
    profile: Profile,
    cursor: Position,
    announcement: Option<String>,
    scheduler: MoveScheduler,
    moves_tx: mpsc::UnboundedSender<ScheduledMove>,
    share_url: Option<String>,
    host: Arc<dyn HostWindow>,
    should_quit: bool,
}

impl App {
    /// Creates the application and the channel delivering scheduled moves.
    pub fn new(
        settings: Settings,
        profile: Profile,
        share_url: Option<String>,
        host: Arc<dyn HostWindow>,
        delay: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<ScheduledMove>) {
        let (moves_tx, moves_rx) = mpsc::unbounded_channel();
        let app = Self {
            round: Round::new(settings.mode),
            settings,
            profile,
            cursor: Position::Center,
            announcement: None,
            scheduler: MoveScheduler::new(delay),
            moves_tx,
            share_url,
            host,
            should_quit: false,
        };
        (app, moves_rx)
    }

    /// The round being played.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// The session settings.
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// The human player's profile.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// The cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The end-of-round announcement, if any.
    pub fn announcement(&self) -> Option<&str> {
        self.announcement.as_deref()
    }

    /// True when a share link is configured.
    pub fn has_share_link(&self) -> bool {
        self.share_url.is_some()
    }

    /// True once the player has quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key event from the terminal.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.request_close(),
            KeyCode::Char('r') => self.reset_round(),
            KeyCode::Char('m') => self.toggle_mode(),
            KeyCode::Char('d') => self.cycle_difficulty(),
            KeyCode::Char('s') => self.open_share_link(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(digit) = c.to_digit(10)
                    && (1..=9).contains(&digit)
                    && let Some(pos) = Position::from_index(digit as usize - 1)
                {
                    self.select(pos);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key.code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
            _ => {}
        }
    }

    /// Handles a move delivered by the scheduler.
    ///
    /// A delivery from a cancelled generation is discarded: it was computed
    /// against a board that has since been reset or reconfigured.
    pub fn handle_scheduled(&mut self, mv: ScheduledMove) {
        if !self.scheduler.accepts(&mv) {
            debug!("Discarding stale scheduled move");
            return;
        }
        let Some(pos) = mv.position else {
            return;
        };

        if let Some(outcome) = self.round.computer_move(pos) {
            info!(%pos, "Computer played");
            self.after_move(outcome);
        }
    }

    /// Applies a human cell selection; invalid selections no-op.
    fn select(&mut self, pos: Position) {
        let Some(outcome) = self.round.human_move(pos) else {
            return;
        };
        self.after_move(outcome);
    }

    fn after_move(&mut self, outcome: Outcome) {
        self.announce(outcome);
        if outcome == Outcome::Continue && self.round.awaits_computer() {
            self.scheduler.schedule(
                self.round.board().clone(),
                Mark::O,
                self.settings.difficulty,
                self.moves_tx.clone(),
            );
        }
    }

    fn announce(&mut self, outcome: Outcome) {
        let name = self.profile.display_name();
        let text = match (self.round.mode(), outcome) {
            (_, Outcome::Continue) => return,
            (GameMode::VsComputer, Outcome::XWon) => format!("🎉 {name} wins! 🎉"),
            (GameMode::VsComputer, Outcome::OWon) => format!("😵 {name} loses."),
            (GameMode::VsComputer, Outcome::Tie) => "🎭 It's a tie! 🎭".to_string(),
            (GameMode::TwoPlayer, Outcome::XWon) => "Player X won".to_string(),
            (GameMode::TwoPlayer, Outcome::OWon) => "Player O won".to_string(),
            (GameMode::TwoPlayer, Outcome::Tie) => "Tie".to_string(),
        };
        self.announcement = Some(text);
    }

    /// Starts the round over; any pending reply is cancelled.
    pub fn reset_round(&mut self) {
        info!("Resetting round");
        self.scheduler.cancel();
        self.round.reset();
        self.announcement = None;
    }

    /// Switches opponent mode and starts a fresh round.
    pub fn toggle_mode(&mut self) {
        self.settings.mode = self.settings.mode.toggle();
        info!(mode = self.settings.mode.label(), "Mode changed");
        self.scheduler.cancel();
        self.round = Round::new(self.settings.mode);
        self.announcement = None;
    }

    /// Advances difficulty and starts a fresh round.
    pub fn cycle_difficulty(&mut self) {
        self.settings.difficulty = self.settings.difficulty.cycle();
        info!(difficulty = self.settings.difficulty.label(), "Difficulty changed");
        self.scheduler.cancel();
        self.round = Round::new(self.settings.mode);
        self.announcement = None;
    }

    fn open_share_link(&self) {
        let Some(url) = self.share_url.clone() else {
            return;
        };
        let host = Arc::clone(&self.host);
        tokio::spawn(async move {
            if let Err(e) = host.open_url(&url).await {
                warn!(error = %e, "Could not open share link");
            }
        });
    }

    fn request_close(&mut self) {
        if !self.host.close() {
            debug!("Host did not handle close; tearing down locally");
        }
        self.should_quit = true;
    }
}
