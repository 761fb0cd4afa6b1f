//! Pipeline Quiz - an interactive terminal game for learning the stages of an
//! IoT data pipeline
//!
//! This library provides the core functionality for the game, including:
//! - The stage catalog and the shuffled presentation order
//! - A bidirectional placement store with atomic updates
//! - The interaction controller that enforces placement rules
//! - Scoring with an accuracy count and a decaying time bonus
//! - The session clock and the activity log
//! - The terminal renderer and command-line interface
//!
//! # Example
//!
//! ```no_run
//! use pipequiz::cli::run;
//!
//! fn main() {
//!     if let Err(e) = run() {
//!         eprintln!("Error: {}", e);
//!         std::process::exit(1);
//!     }
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod models;
pub mod utils;
