//! Phonetic indexing for Tulu words written in Kannada orthography.
//!
//! Converts a word into three Romanized phonetic keys of increasing
//! narrowness, like Metaphone for English. `key0` is a broad hash that
//! ignores hard sounds and phonetic modifiers, `key1` also separates hard
//! sounds, and `key2` is the narrowest, keeping gemination and
//! vowel-length modifiers as well. Words that sound alike but are spelled
//! differently collapse to the same key, which makes the keys usable for
//! spelling-tolerant search, spell checking, and word suggestion.
//!
//! The encoder is table-driven: four glyph tables (vowels, consonants,
//! compound clusters, modifier signs) feed a longest-match trie, and a
//! single left-to-right scan rewrites script graphemes to ASCII code
//! fragments.
//!
//! ```
//! let keys = tlphone::encode("ಮಕ್ಕಳು");
//! assert_eq!(keys.key0, "MKL");
//! assert_eq!(keys.key1, "MKL1");
//! assert_eq!(keys.key2, "MK2L15");
//! ```

mod config;
mod encode;
mod table;
mod trie;
pub mod unicode;

#[cfg(test)]
mod tests;

pub use config::{parse_glyph_toml, GlyphConfigError, GlyphTables};
pub use encode::{encode, PhoneticKeys};
pub use table::DEFAULT_TOML;
pub use trie::{GlyphClass, GlyphMatch, GlyphTrie};
