//! GUI module for the Ta-Te-Ti game
//!
//! Native front end built on egui/eframe: play against the engine or
//! hotseat with hints, on either rule set.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::TatetiApp;
pub use game_state::{GameMode, GameResult, GameState};
