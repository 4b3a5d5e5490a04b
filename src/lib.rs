//! # Connect Four
//!
//! A Connect Four game for the terminal with three AI difficulty tiers:
//! random, one-ply heuristic, and depth-4 minimax with alpha-beta pruning.
//! The UI is built with Ratatui; settings and cumulative statistics persist
//! to disk between sessions.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine with undo
//! - [`ai`] — Strategy trait and the three difficulty tiers
//! - [`config`] — User settings (mode, difficulty, theme)
//! - [`stats`] — Cumulative statistics and per-game deltas
//! - [`persist`] — Settings/stats storage behind a capability trait
//! - [`ui`] — Terminal UI: app loop and rendering
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod persist;
pub mod stats;
pub mod ui;
