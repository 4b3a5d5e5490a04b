//! Terminal UI: the event-driven app shell and ratatui rendering.

mod app;
mod game_view;

pub use app::App;
