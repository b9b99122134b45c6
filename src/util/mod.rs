//! Utility algorithms shared across the engine.

pub mod levenshtein;
