//! Output formatting for meal lookups

pub mod console;
pub mod date;
