//! In-browser state for the running round.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<GameState>` context by `App`. The login button resets
//! it when a new game starts; the game page folds guess results into it.
//!
//! Guess requests are asynchronous, so a reply can arrive after the round it
//! belongs to was reset. `round` changes on every reset and results tagged
//! with an older round are dropped.

#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

use crate::net::error::ApiError;
use crate::net::types::GuessOutcome;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    /// Incremented by [`GameState::reset`].
    pub round: u32,
    /// Clues revealed so far, oldest first.
    pub hints: Vec<String>,
    /// Guesses the server accepted this round.
    pub guesses: u32,
    pub unblurred: bool,
    pub finished: bool,
    /// Last status line shown under the guess form.
    pub message: Option<String>,
}

impl GameState {
    /// Clear the round and move to the next round number.
    pub fn reset(&mut self) {
        *self = Self { round: self.round.wrapping_add(1), ..Self::default() };
    }

    /// Fold one accepted guess into the round.
    pub fn apply_outcome(&mut self, outcome: GuessOutcome) {
        self.guesses += 1;
        self.message = None;
        match outcome {
            GuessOutcome::Hint(hint) => self.hints.push(hint),
            GuessOutcome::Unblur => self.unblurred = true,
            GuessOutcome::Finished => self.finished = true,
        }
    }

    /// Apply a guess result; failures only update the status line.
    pub fn apply_result(&mut self, result: Result<GuessOutcome, ApiError>) {
        match result {
            Ok(outcome) => self.apply_outcome(outcome),
            Err(e) => self.message = Some(format!("Guess failed: {e}")),
        }
    }

    /// Apply a result for the guess sent during `round`.
    ///
    /// Returns `false` and leaves the state untouched when the round has been
    /// reset since the guess was sent.
    pub fn apply_result_for_round(&mut self, round: u32, result: Result<GuessOutcome, ApiError>) -> bool {
        if self.round != round {
            return false;
        }
        self.apply_result(result);
        true
    }
}
