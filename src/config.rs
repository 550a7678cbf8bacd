use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::unicode::is_kannada;

/// The four glyph tables, keyed by script grapheme.
///
/// `vowels`, `consonants`, and `modifiers` are keyed by single characters;
/// `compounds` by multi-character clusters (consonant + virama + consonant,
/// sometimes with a trailing vowel sign). Values are `[0-9A-Z]` code
/// fragments; only modifiers may map to the empty string.
#[derive(Debug, Deserialize)]
pub struct GlyphTables {
    pub vowels: BTreeMap<String, String>,
    pub consonants: BTreeMap<String, String>,
    pub compounds: BTreeMap<String, String>,
    pub modifiers: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum GlyphConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    EmptyTable(&'static str),
    #[error("key {0:?} has characters outside the Kannada block")]
    NonKannadaKey(String),
    #[error("key {key:?} in [{table}] must be a single character")]
    NotSingleChar { table: &'static str, key: String },
    #[error("compound key {0:?} must span at least two characters")]
    ShortCompound(String),
    #[error("invalid code {code:?} for key {key:?} (codes are [0-9A-Z])")]
    InvalidCode { key: String, code: String },
    #[error("empty code for key {0:?} (only modifiers may map to \"\")")]
    EmptyCode(String),
    #[error("key {0:?} appears in more than one table")]
    DuplicateKey(String),
    #[error("glyph tables already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into the four validated glyph tables.
///
/// A malformed table is a configuration defect, never a per-word runtime
/// error: validation happens once here, before any encoding.
pub fn parse_glyph_toml(toml_str: &str) -> Result<GlyphTables, GlyphConfigError> {
    let tables: GlyphTables =
        toml::from_str(toml_str).map_err(|e| GlyphConfigError::Parse(e.to_string()))?;

    validate_table("vowels", &tables.vowels, true, false)?;
    validate_table("consonants", &tables.consonants, true, false)?;
    validate_table("compounds", &tables.compounds, false, false)?;
    validate_table("modifiers", &tables.modifiers, true, true)?;

    // A grapheme must classify unambiguously.
    let mut seen = BTreeSet::new();
    for table in [
        &tables.vowels,
        &tables.consonants,
        &tables.compounds,
        &tables.modifiers,
    ] {
        for key in table.keys() {
            if !seen.insert(key.as_str()) {
                return Err(GlyphConfigError::DuplicateKey(key.clone()));
            }
        }
    }

    Ok(tables)
}

fn validate_table(
    name: &'static str,
    table: &BTreeMap<String, String>,
    single_char: bool,
    allow_empty_code: bool,
) -> Result<(), GlyphConfigError> {
    if table.is_empty() {
        return Err(GlyphConfigError::EmptyTable(name));
    }

    for (key, code) in table {
        if !key.chars().all(is_kannada) {
            return Err(GlyphConfigError::NonKannadaKey(key.clone()));
        }
        let key_chars = key.chars().count();
        if single_char && key_chars != 1 {
            return Err(GlyphConfigError::NotSingleChar {
                table: name,
                key: key.clone(),
            });
        }
        if !single_char && key_chars < 2 {
            return Err(GlyphConfigError::ShortCompound(key.clone()));
        }
        if code.is_empty() && !allow_empty_code {
            return Err(GlyphConfigError::EmptyCode(key.clone()));
        }
        if !code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(GlyphConfigError::InvalidCode {
                key: key.clone(),
                code: code.clone(),
            });
        }
    }

    Ok(())
}
