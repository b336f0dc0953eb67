pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod fleet;
pub mod highscore;
pub mod input;
pub mod menu;
pub mod settings;
pub mod starfield;
pub mod stats;
pub mod viewport;
