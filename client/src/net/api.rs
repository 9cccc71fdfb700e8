//! REST helpers for talking to the game server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): `ApiError::Unavailable`, since these calls are only
//! triggered by browser events.
//!
//! SYSTEM CONTEXT
//! ==============
//! The game server runs separately on `127.0.0.1:5000`. The base URL can be
//! overridden at build time with `HARMONY_HUNT_API_BASE`.
//!
//! Components depend on the `GameApi` trait rather than on `HttpGameApi`
//! directly so click handlers can run in unit tests against a fake.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::GuessOutcome;
#[cfg(feature = "hydrate")]
use super::types::{GuessRequest, GuessResponse};

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";
pub const START_GAME_PATH: &str = "/start-top-fifty-game";
pub const MAKE_GUESS_PATH: &str = "/make-guess";
pub const END_GAME_PATH: &str = "/end-game";

/// Game server base URL without a trailing slash.
pub fn api_base() -> &'static str {
    resolve_api_base(option_env!("HARMONY_HUNT_API_BASE"))
}

/// Blank overrides fall back to [`DEFAULT_API_BASE`] rather than producing
/// relative URLs.
fn resolve_api_base(raw: Option<&'static str>) -> &'static str {
    match raw.map(|base| base.trim().trim_end_matches('/')) {
        Some(base) if !base.is_empty() => base,
        _ => DEFAULT_API_BASE,
    }
}

fn join_endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

pub fn start_game_endpoint() -> String {
    join_endpoint(api_base(), START_GAME_PATH)
}

pub fn make_guess_endpoint() -> String {
    join_endpoint(api_base(), MAKE_GUESS_PATH)
}

pub fn end_game_endpoint() -> String {
    join_endpoint(api_base(), END_GAME_PATH)
}

/// Game-server operations the UI performs.
#[allow(async_fn_in_trait)]
pub trait GameApi {
    /// `GET /start-top-fifty-game`. The response body is ignored.
    async fn start_top_fifty_game(&self) -> Result<(), ApiError>;

    /// `POST /make-guess` with `{"guess": ...}`.
    async fn make_guess(&self, guess: &str) -> Result<GuessOutcome, ApiError>;

    /// `POST /end-game`.
    async fn end_game(&self) -> Result<(), ApiError>;
}

/// `GameApi` backed by the browser's `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpGameApi;

impl GameApi for HttpGameApi {
    async fn start_top_fifty_game(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&start_game_endpoint())
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            ensure_success(resp).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn make_guess(&self, guess: &str) -> Result<GuessOutcome, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = GuessRequest { guess: guess.to_owned() };
            let resp = gloo_net::http::Request::post(&make_guess_endpoint())
                .json(&body)
                .map_err(|e| ApiError::Decode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let resp = ensure_success(resp).await?;
            let parsed: GuessResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(parsed.into_outcome())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = guess;
            Err(ApiError::Unavailable)
        }
    }

    async fn end_game(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&end_game_endpoint())
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            ensure_success(resp).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}

/// Pass 2xx responses through; classify everything else.
#[cfg(feature = "hydrate")]
async fn ensure_success(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}
