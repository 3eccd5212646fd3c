//! Sliding-window character model.
//!
//! - Per-window distributions (`FrequencyTable`)
//! - Training and generation (`LanguageModel`)

/// Per-window table of following characters with counts and
/// cumulative probabilities.
///
/// Supports incremental updates and sampling from a uniform draw.
pub mod frequency_table;

/// Window-to-table mapping, corpus training and text generation.
///
/// Owns its random source so that seeded models are reproducible.
pub mod language_model;
