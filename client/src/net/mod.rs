//! Networking modules for the game-server HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls, `error` classifies their failures, and
//! `types` defines the JSON bodies the game server sends and accepts.

pub mod api;
pub mod error;
pub mod types;
