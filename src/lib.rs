//! Lander game library
//!
//! A 2D planetary-descent arcade game: fly a craft down through a scrolling
//! atmosphere and touch down slowly and upright.  The flight model, landing
//! rules and highscore store are plain Rust; the Bevy plugins in [`flight`],
//! [`menu`], [`rendering`] and [`audio`] wrap them in a playable app.

pub mod audio;
pub mod config;
pub mod constants;
pub mod craft;
pub mod drag;
pub mod error;
pub mod flight;
pub mod graphics;
pub mod hazard;
pub mod highscore;
pub mod landing;
pub mod level;
pub mod menu;
pub mod motion;
pub mod name_entry;
pub mod rendering;
