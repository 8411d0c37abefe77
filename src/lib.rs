//! # Drop Four
//!
//! The rules engine of a Connect-Four-style game: a board of configurable
//! width and height, gravity-based placement by column, and four-in-a-row
//! detection over precomputed windows (horizontal, vertical, both diagonals).
//! Rendering, animation, and audio are the caller's concern; the engine only
//! reports cell state and move outcomes.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, window index, drop resolution, state machine
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
