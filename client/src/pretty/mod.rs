//! Helpers for pretty-printing streak instructions, errors and statuses in a readable, colorized
//! format.

pub mod instruction;
pub mod instruction_error;
pub mod streak;
