//! Client-side utilities for the daily check-in streak program.
//!
//! Includes configuration, PDA derivation, the chain client seam, transaction submission, streak
//! queries and pretty-printing helpers.

pub mod chain;
pub mod config;
pub mod error;
pub mod load_env;
pub mod logs;
pub mod pda;
pub mod pretty;
pub mod query;
pub mod transactions;
pub mod views;
pub mod wallet;

pub use logs::LogColor;
