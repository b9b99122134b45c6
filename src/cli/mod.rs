//! Command-line interface for the folio engine.

pub mod args;
pub mod commands;
pub mod output;
