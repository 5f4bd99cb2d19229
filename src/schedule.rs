//! Deferred scheduling of the automated player's reply.

use crate::ai::{self, Difficulty};
use crate::game::{Board, Mark, Position};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// A move delivered by the scheduler.
#[derive(Debug, Clone, Copy)]
pub struct ScheduledMove {
    /// The chosen square, or `None` when no empty square remained.
    pub position: Option<Position>,
    token: u64,
}

/// Schedules the automated player's reply after a fixed display delay.
///
/// The delay is cosmetic (the selection itself is instant), but it opens a
/// window in which the board can be reset or the mode toggled. Each
/// schedule carries a generation token: [`MoveScheduler::cancel`] aborts
/// the pending task *and* bumps the generation, so a reply computed against
/// a stale board is discarded even if its task already delivered.
#[derive(Debug)]
pub struct MoveScheduler {
    delay: Duration,
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl MoveScheduler {
    /// Creates a scheduler with the given display delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    /// Schedules a reply for `mark` against a snapshot of `board`.
    ///
    /// Any previously pending reply is cancelled first; at most one reply
    /// is in flight.
    #[instrument(skip(self, board, tx))]
    pub fn schedule(
        &mut self,
        board: Board,
        mark: Mark,
        difficulty: Difficulty,
        tx: mpsc::UnboundedSender<ScheduledMove>,
    ) {
        self.cancel();
        let token = self.generation;
        let delay = self.delay;

        debug!(%mark, %difficulty, token, "Scheduling reply");
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let position = ai::select_move(&board, mark, difficulty, &mut rand::thread_rng());
            // The receiver may be gone during shutdown; nothing to do then.
            let _ = tx.send(ScheduledMove { position, token });
        }));
    }

    /// Cancels any pending reply and invalidates undelivered ones.
    #[instrument(skip(self))]
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            debug!(generation = self.generation, "Cancelling pending reply");
            handle.abort();
        }
        self.generation += 1;
    }

    /// True when the delivered move belongs to the current generation.
    pub fn accepts(&self, mv: &ScheduledMove) -> bool {
        mv.token == self.generation
    }
}

impl Drop for MoveScheduler {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
