//! Game page: guess form, revealed hints, and an end-game action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from the login button after the server has picked a song. Each
//! guess is posted to the game server and its result folded into the shared
//! `GameState`. Ending the game returns to the landing page.

#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{GameApi, HttpGameApi};
use crate::state::game::GameState;

const EMPTY_GUESS_MESSAGE: &str = "Enter a song title first.";

/// Trim a raw guess and reject empty input before any request is made.
fn validate_guess_input(raw: &str) -> Result<String, &'static str> {
    let guess = raw.trim();
    if guess.is_empty() {
        return Err(EMPTY_GUESS_MESSAGE);
    }
    Ok(guess.to_owned())
}

/// Post a guess and fold the reply into the current `game` state.
///
/// The reply is applied to whatever the signal holds when it arrives, and is
/// dropped if the round was reset while the request was pending.
async fn submit_guess<A: GameApi>(api: &A, guess: &str, game: RwSignal<GameState>) {
    let round = game.with_untracked(|s| s.round);
    let result = api.make_guess(guess).await;
    if let Err(e) = &result {
        log::warn!("guess failed: {e}");
    }
    game.update(|s| {
        if !s.apply_result_for_round(round, result) {
            log::debug!("dropping guess reply for ended round {round}");
        }
    });
}

#[component]
pub fn GamePage() -> impl IntoView {
    let game = expect_context::<RwSignal<GameState>>();
    let navigate = use_navigate();
    let guess = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_guess = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || game.with(|s| s.finished) {
            return;
        }
        let guess_value = match validate_guess_input(&guess.get()) {
            Ok(value) => value,
            Err(msg) => {
                game.update(|s| s.message = Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);

        leptos::task::spawn_local(async move {
            submit_guess(&HttpGameApi, &guess_value, game).await;
            guess.set(String::new());
            busy.set(false);
        });
    };

    let on_end = move |_: leptos::ev::MouseEvent| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = HttpGameApi.end_game().await {
                log::error!("failed to end game: {e}");
            }
            game.update(GameState::reset);
            navigate("/", NavigateOptions::default());
        });
    };

    view! {
        <div class="game-page">
            <h1>"Name that song"</h1>
            <p class="game-page__guesses">{move || format!("Guesses: {}", game.with(|s| s.guesses))}</p>
            <form class="guess-form" on:submit=on_guess>
                <input
                    class="guess-input"
                    type="text"
                    placeholder="Song title"
                    prop:value=move || guess.get()
                    on:input=move |ev| guess.set(event_target_value(&ev))
                    disabled=move || game.with(|s| s.finished)
                />
                <button
                    class="guess-button"
                    type="submit"
                    disabled=move || busy.get() || game.with(|s| s.finished)
                >
                    "Guess"
                </button>
            </form>
            <ul class="hint-list">
                {move || {
                    game.with(|s| {
                        s.hints.iter().map(|hint| view! { <li class="hint">{hint.clone()}</li> }).collect_view()
                    })
                }}
            </ul>
            <Show when=move || game.with(|s| s.unblurred)>
                <p class="game-message">"Album cover revealed."</p>
            </Show>
            <Show when=move || game.with(|s| s.finished)>
                <p class="game-message game-message--done">"Round over."</p>
            </Show>
            <Show when=move || game.with(|s| s.message.is_some())>
                <p class="game-message">{move || game.with(|s| s.message.clone().unwrap_or_default())}</p>
            </Show>
            <button class="end-game-button" on:click=on_end>
                "End game"
            </button>
        </div>
    }
}
