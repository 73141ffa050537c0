//! marquee - browse what's playing in cinemas from the terminal
//!
//! The first movie of the now-playing listing is shown as a banner; the rest
//! are paged through a row of boxes with a slide animation. Selecting a box
//! navigates to `/items/<id>`, which opens a detail overlay anchored to the
//! scroll position.

pub mod browse;
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod http;
pub mod images;
pub mod logging;
pub mod models;
pub mod source;
pub mod tui;

pub use config::MarqueeConfig;
pub use db::Database;
pub use models::{Movie, MoviesPage};
