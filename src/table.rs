//! Embedded default glyph tables.
//!
//! The data lives in `default_glyphs.toml` next to this file: four tables
//! (independent vowels, consonants, compound clusters, modifier signs)
//! mapping Kannada-script graphemes to Romanized code fragments.

pub const DEFAULT_TOML: &str = include_str!("default_glyphs.toml");
