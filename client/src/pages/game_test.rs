use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::{LocalPool, block_on};
use futures::task::LocalSpawnExt;

use super::*;
use crate::net::error::ApiError;
use crate::net::types::GuessOutcome;

/// Fake game server that replies to guesses from a script.
struct ScriptedApi {
    replies: RefCell<Vec<Result<GuessOutcome, ApiError>>>,
    seen: RefCell<Vec<String>>,
}

impl ScriptedApi {
    fn new(mut replies: Vec<Result<GuessOutcome, ApiError>>) -> Self {
        replies.reverse();
        Self { replies: RefCell::new(replies), seen: RefCell::new(Vec::new()) }
    }
}

impl GameApi for ScriptedApi {
    async fn start_top_fifty_game(&self) -> Result<(), ApiError> {
        Ok(())
    }

    async fn make_guess(&self, guess: &str) -> Result<GuessOutcome, ApiError> {
        self.seen.borrow_mut().push(guess.to_owned());
        self.replies.borrow_mut().pop().unwrap_or(Err(ApiError::Unavailable))
    }

    async fn end_game(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

/// Fake game server whose guess reply is held until the test releases it.
struct PendingApi {
    reply: RefCell<Option<oneshot::Receiver<Result<GuessOutcome, ApiError>>>>,
}

impl GameApi for PendingApi {
    async fn start_top_fifty_game(&self) -> Result<(), ApiError> {
        Ok(())
    }

    async fn make_guess(&self, _guess: &str) -> Result<GuessOutcome, ApiError> {
        let reply = self.reply.borrow_mut().take();
        match reply {
            Some(rx) => rx.await.unwrap_or(Err(ApiError::Unavailable)),
            None => Err(ApiError::Unavailable),
        }
    }

    async fn end_game(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

// =============================================================
// validate_guess_input
// =============================================================

#[test]
fn validate_guess_input_trims() {
    assert_eq!(validate_guess_input("  Yellow  "), Ok("Yellow".to_owned()));
}

#[test]
fn validate_guess_input_rejects_blank() {
    assert_eq!(validate_guess_input(""), Err("Enter a song title first."));
    assert_eq!(validate_guess_input(" \t "), Err("Enter a song title first."));
}

// =============================================================
// submit_guess
// =============================================================

#[test]
fn submit_guess_posts_and_records_hints() {
    let api = ScriptedApi::new(vec![
        Ok(GuessOutcome::Hint("alt-rock".to_owned())),
        Ok(GuessOutcome::Unblur),
        Ok(GuessOutcome::Finished),
    ]);
    let game = RwSignal::new(GameState::default());
    block_on(submit_guess(&api, "Creep", game));
    block_on(submit_guess(&api, "Karma Police", game));
    block_on(submit_guess(&api, "No Surprises", game));

    assert_eq!(*api.seen.borrow(), vec!["Creep", "Karma Police", "No Surprises"]);
    let state = game.get_untracked();
    assert_eq!(state.hints, vec!["alt-rock".to_owned()]);
    assert!(state.unblurred);
    assert!(state.finished);
    assert_eq!(state.guesses, 3);
}

#[test]
fn submit_guess_failure_sets_message_only() {
    let api = ScriptedApi::new(vec![Err(ApiError::Rejected("Game not started".to_owned()))]);
    let game = RwSignal::new(GameState::default());
    block_on(submit_guess(&api, "Creep", game));
    let state = game.get_untracked();
    assert_eq!(state.guesses, 0);
    assert_eq!(state.message.as_deref(), Some("Guess failed: Game not started"));
}

#[test]
fn reply_arriving_after_reset_does_not_restore_ended_round() {
    let game = RwSignal::new(GameState { hints: vec!["old".to_owned()], guesses: 1, ..GameState::default() });
    let (tx, rx) = oneshot::channel();
    let api = Rc::new(PendingApi { reply: RefCell::new(Some(rx)) });

    let mut pool = LocalPool::new();
    let task_api = Rc::clone(&api);
    pool.spawner()
        .spawn_local(async move { submit_guess(&*task_api, "Creep", game).await })
        .unwrap();
    pool.run_until_stalled();

    // The user ends the game while the guess is still in flight.
    game.update(GameState::reset);
    tx.send(Ok(GuessOutcome::Hint("rock".to_owned()))).unwrap();
    pool.run();

    assert_eq!(game.get_untracked(), GameState { round: 1, ..GameState::default() });
}

#[test]
fn reply_is_applied_on_top_of_concurrent_updates() {
    let game = RwSignal::new(GameState::default());
    let (tx, rx) = oneshot::channel();
    let api = Rc::new(PendingApi { reply: RefCell::new(Some(rx)) });

    let mut pool = LocalPool::new();
    let task_api = Rc::clone(&api);
    pool.spawner()
        .spawn_local(async move { submit_guess(&*task_api, "Creep", game).await })
        .unwrap();
    pool.run_until_stalled();

    game.update(|s| s.hints.push("earlier".to_owned()));
    tx.send(Ok(GuessOutcome::Hint("rock".to_owned()))).unwrap();
    pool.run();

    assert_eq!(game.get_untracked().hints, vec!["earlier".to_owned(), "rock".to_owned()]);
}
