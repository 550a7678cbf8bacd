use std::collections::HashMap;
use std::sync::OnceLock;

use crate::config::{parse_glyph_toml, GlyphConfigError, GlyphTables};
use crate::table::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Which of the four glyph tables a key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphClass {
    Vowel,
    Consonant,
    Compound,
    Modifier,
}

/// Longest table key found at the start of a character slice.
#[derive(Debug, PartialEq)]
pub struct GlyphMatch<'a> {
    /// Number of input characters the key spans.
    pub len: usize,
    pub code: &'a str,
    pub class: GlyphClass,
}

struct Node {
    children: HashMap<char, Node>,
    entry: Option<(String, GlyphClass)>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            entry: None,
        }
    }
}

/// Trie over all four glyph tables, tagged per key with its class.
///
/// Compound-cluster keys share their leading characters with consonant
/// keys; `longest_match` resolves the overlap by always preferring the
/// longer key, which is what makes a single substitution scan safe.
pub struct GlyphTrie {
    root: Node,
}

impl GlyphTrie {
    /// Set custom glyph TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), GlyphConfigError> {
        // Validate eagerly
        parse_glyph_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| GlyphConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static GlyphTrie {
        static INSTANCE: OnceLock<GlyphTrie> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let tables = parse_glyph_toml(toml_str).expect("glyph TOML must be valid");
            GlyphTrie::build(&tables)
        })
    }

    fn build(tables: &GlyphTables) -> GlyphTrie {
        let mut trie = GlyphTrie { root: Node::new() };
        for (glyph, code) in &tables.vowels {
            trie.insert(glyph, code, GlyphClass::Vowel);
        }
        for (glyph, code) in &tables.consonants {
            trie.insert(glyph, code, GlyphClass::Consonant);
        }
        for (glyph, code) in &tables.compounds {
            trie.insert(glyph, code, GlyphClass::Compound);
        }
        for (glyph, code) in &tables.modifiers {
            trie.insert(glyph, code, GlyphClass::Modifier);
        }
        trie
    }

    fn insert(&mut self, glyph: &str, code: &str, class: GlyphClass) {
        let mut node = &mut self.root;
        for c in glyph.chars() {
            node = node.children.entry(c).or_insert_with(Node::new);
        }
        node.entry = Some((code.to_string(), class));
    }

    /// Return the longest table key at the start of `chars`, if any.
    pub fn longest_match(&self, chars: &[char]) -> Option<GlyphMatch<'_>> {
        let mut node = &self.root;
        let mut best = None;
        for (i, c) in chars.iter().enumerate() {
            match node.children.get(c) {
                Some(child) => node = child,
                None => break,
            }
            if let Some((code, class)) = &node.entry {
                best = Some(GlyphMatch {
                    len: i + 1,
                    code,
                    class: *class,
                });
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_consonant_match() {
        let trie = GlyphTrie::global();
        let m = trie.longest_match(&chars("ಕ")).unwrap();
        assert_eq!(m.len, 1);
        assert_eq!(m.code, "K");
        assert_eq!(m.class, GlyphClass::Consonant);
    }

    #[test]
    fn test_vowel_match() {
        let trie = GlyphTrie::global();
        let m = trie.longest_match(&chars("ಐ")).unwrap();
        assert_eq!(m.code, "AI");
        assert_eq!(m.class, GlyphClass::Vowel);
    }

    #[test]
    fn test_modifier_match() {
        let trie = GlyphTrie::global();
        let m = trie.longest_match(&chars("್")).unwrap();
        assert_eq!(m.code, "");
        assert_eq!(m.class, GlyphClass::Modifier);
    }

    #[test]
    fn test_compound_wins_over_consonant() {
        let trie = GlyphTrie::global();
        // ಕ alone is a consonant, but ಕ್ಕ must match as one cluster.
        let m = trie.longest_match(&chars("ಕ್ಕಳ")).unwrap();
        assert_eq!(m.len, 3);
        assert_eq!(m.code, "K2");
        assert_eq!(m.class, GlyphClass::Compound);
    }

    #[test]
    fn test_four_char_compound() {
        let trie = GlyphTrie::global();
        let m = trie.longest_match(&chars("ಗ್ಗಾ")).unwrap();
        assert_eq!(m.len, 4);
        assert_eq!(m.code, "K");
        assert_eq!(m.class, GlyphClass::Compound);
    }

    #[test]
    fn test_broken_cluster_falls_back_to_consonant() {
        let trie = GlyphTrie::global();
        // ಕ್ತ is no compound: the match stops at the bare ಕ.
        let m = trie.longest_match(&chars("ಕ್ತ")).unwrap();
        assert_eq!(m.len, 1);
        assert_eq!(m.code, "K");
        assert_eq!(m.class, GlyphClass::Consonant);
    }

    #[test]
    fn test_no_match_for_foreign_chars() {
        let trie = GlyphTrie::global();
        assert!(trie.longest_match(&chars("abc")).is_none());
        assert!(trie.longest_match(&chars("अ")).is_none());
        assert!(trie.longest_match(&[]).is_none());
    }

    #[test]
    fn test_unmapped_kannada_char() {
        let trie = GlyphTrie::global();
        // In-block but absent from every table (avagraha).
        assert!(trie.longest_match(&chars("ಽ")).is_none());
    }

    #[test]
    fn test_all_table_keys_resolve() {
        let trie = GlyphTrie::global();
        let tables = parse_glyph_toml(DEFAULT_TOML).unwrap();
        for (table, class) in [
            (&tables.vowels, GlyphClass::Vowel),
            (&tables.consonants, GlyphClass::Consonant),
            (&tables.compounds, GlyphClass::Compound),
            (&tables.modifiers, GlyphClass::Modifier),
        ] {
            for (glyph, code) in table {
                let key: Vec<char> = glyph.chars().collect();
                let m = trie
                    .longest_match(&key)
                    .unwrap_or_else(|| panic!("no match for table key {glyph}"));
                assert_eq!(m.len, key.len(), "partial match for {glyph}");
                assert_eq!(m.code, code, "code mismatch for {glyph}");
                assert_eq!(m.class, class, "class mismatch for {glyph}");
            }
        }
    }

    #[test]
    fn test_init_custom_after_use() {
        // The global trie is already built by other tests; a second
        // initialization attempt must not go unnoticed.
        let first = GlyphTrie::init_custom(DEFAULT_TOML.to_string());
        let second = GlyphTrie::init_custom(DEFAULT_TOML.to_string());
        assert!(first.is_ok() || matches!(first, Err(GlyphConfigError::AlreadyInitialized)));
        assert!(matches!(
            second,
            Err(GlyphConfigError::AlreadyInitialized)
        ));
    }

    #[test]
    fn test_init_custom_rejects_invalid() {
        let err = GlyphTrie::init_custom("[vowels]\n\"x\" = \"X\"".to_string()).unwrap_err();
        assert!(matches!(err, GlyphConfigError::Parse(_)));
    }
}
