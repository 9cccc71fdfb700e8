//! JSON bodies exchanged with the game server.
//!
//! DESIGN
//! ======
//! The game server answers a guess with either `{"hint": ...}` or
//! `{"action": "unblur"}`; a null hint means the round is over. `GuessResponse`
//! keeps both keys optional and `into_outcome` collapses them into one enum.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /make-guess`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GuessRequest {
    pub guess: String,
}

/// Raw response to `POST /make-guess`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct GuessResponse {
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
}

/// Error body the game server sends with a 400 when no game is running.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// What a submitted guess did to the round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Wrong guess; the server revealed another clue.
    Hint(String),
    /// Reveal the album cover.
    Unblur,
    /// Correct guess or guesses exhausted.
    Finished,
}

impl GuessResponse {
    pub fn into_outcome(self) -> GuessOutcome {
        if self.action.as_deref() == Some("unblur") {
            return GuessOutcome::Unblur;
        }
        match self.hint {
            Some(hint) => GuessOutcome::Hint(hint),
            None => GuessOutcome::Finished,
        }
    }
}
