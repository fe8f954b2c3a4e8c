//! Arena Runner
//!
//! Infrastructure for running matches between engines on any of the
//! supported games:
//! - Playing a series of games with seat alternation
//! - Recording results to disk for later comparison
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the minimax and random engines on Abalone
//! cargo run -p arena -- abalone minimax random --games 20 --depth 3
//! ```

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;
