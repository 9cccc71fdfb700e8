//! "Connect with Spotify" button that starts a top-fifty game.
//!
//! SYSTEM CONTEXT
//! ==============
//! Clicking issues `GET /start-top-fifty-game` against the game server and,
//! on success, routes to `/game`. Failures are logged to the console and
//! otherwise ignored: the button stays clickable and shows no error.
//!
//! Repeated clicks each start their own request. There is no in-flight guard.

#[cfg(test)]
#[path = "login_button_test.rs"]
mod login_button_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{GameApi, HttpGameApi};
use crate::net::error::ApiError;
use crate::state::game::GameState;

/// Route the button navigates to once the server has started a game.
pub const GAME_ROUTE: &str = "/game";

/// Static attributes of the button's image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConnectImage {
    pub src: &'static str,
    pub class: &'static str,
    pub width: u32,
    pub height: u32,
    pub alt: &'static str,
}

/// The "Connect with Spotify" artwork, shown at a fixed 250×50.
pub const CONNECT_IMAGE: ConnectImage = ConnectImage {
    src: "/connect-with-spotify.png",
    class: "Connect-with-spotify",
    width: 250,
    height: 50,
    alt: "Connect with spotify",
};

/// Result of one click, returned for callers that care; the button ignores it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The server started a game and navigation to [`GAME_ROUTE`] was requested.
    Started,
    /// The start request failed; the error has already been logged.
    Failed(ApiError),
}

/// Start a game and navigate to [`GAME_ROUTE`] on success.
///
/// Errors are logged and returned, never retried.
pub async fn handle_login<A, N>(api: &A, navigate: N) -> LoginOutcome
where
    A: GameApi,
    N: FnOnce(&str),
{
    match api.start_top_fifty_game().await {
        Ok(()) => {
            log::debug!("game started");
            navigate(GAME_ROUTE);
            LoginOutcome::Started
        }
        Err(e) => {
            log::error!("failed to start game: {e}");
            LoginOutcome::Failed(e)
        }
    }
}

#[component]
pub fn LoginButton() -> impl IntoView {
    let navigate = use_navigate();
    let game = use_context::<RwSignal<GameState>>();

    let on_click = move |_: leptos::ev::MouseEvent| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let _ = handle_login(&HttpGameApi, |path| {
                if let Some(game) = game {
                    game.update(GameState::reset);
                }
                navigate(path, NavigateOptions::default());
            })
            .await;
        });
    };

    view! { <ConnectButton on:click=on_click/> }
}

/// Button markup without behavior; [`LoginButton`] attaches the click handler.
#[component]
pub fn ConnectButton() -> impl IntoView {
    view! {
        <button class="login-button">
            <img
                src=CONNECT_IMAGE.src
                class=CONNECT_IMAGE.class
                width=CONNECT_IMAGE.width.to_string()
                height=CONNECT_IMAGE.height.to_string()
                alt=CONNECT_IMAGE.alt
            />
        </button>
    }
}
