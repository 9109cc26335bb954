//! Gridfall: a terminal falling-block puzzle game.
//!
//! `core` holds the pure engine (board, shape library, piece, scoring, and
//! the session state machine), `engine` the polled game clock, `input` the
//! key mapping, and `term` the crossterm renderer. The binary wires them
//! together into a single-threaded run loop.

pub mod core;
pub mod engine;
pub mod input;
pub mod term;
pub mod types;
