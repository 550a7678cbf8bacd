use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::trie::GlyphTrie;
use crate::unicode::is_kannada;

/// The three Romanized phonetic keys for one word, broadest first.
///
/// `key0` ignores hard sounds and phonetic modifiers, `key1` keeps the
/// hard-sound marker, `key2` keeps gemination and vowel-length markers as
/// well. `key1` and `key0` are always subsequences of `key2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneticKeys {
    pub key0: String,
    pub key1: String,
    pub key2: String,
}

/// Encode a single Kannada-script Tulu word into its three phonetic keys.
///
/// Total over arbitrary input: characters outside the Kannada block and
/// in-block characters with no table entry are dropped, so unsupported
/// input degrades to shorter (possibly empty) keys rather than an error.
/// Words should be encoded one at a time, not as phrases or sentences.
pub fn encode(input: &str) -> PhoneticKeys {
    let _span = debug_span!("encode", len = input.len()).entered();

    // key2 accounts for hard and modified sounds.
    let key2 = process(input);

    // key1 loses gemination and vowel-length digits, keeps hard sounds.
    let key1 = key2
        .chars()
        .filter(|&c| !matches!(c, '2' | '4'..='9'))
        .collect();

    // key0 additionally loses the hard-sound digit. The dental marker 0 is
    // a letter-equivalent code and survives in every key.
    let key0 = key2
        .chars()
        .filter(|&c| !matches!(c, '1' | '2' | '4'..='9'))
        .collect();

    debug!(%key2, "encoded");
    PhoneticKeys { key0, key1, key2 }
}

/// Rewrite the word to its full-fidelity code string.
///
/// A single left-to-right scan with longest-match lookahead: compound
/// clusters win over their own leading consonant because they span more
/// characters, so no substitution can destroy a later multi-character
/// pattern. The output is `[0-9A-Z]` by construction.
fn process(input: &str) -> String {
    let trie = GlyphTrie::global();
    let chars: Vec<char> = input.chars().filter(|&c| is_kannada(c)).collect();

    let mut out = String::new();
    let mut i = 0;
    while i < chars.len() {
        match trie.longest_match(&chars[i..]) {
            Some(m) => {
                out.push_str(m.code);
                i += m.len;
            }
            // In-block character with no table entry.
            None => i += 1,
        }
    }
    out
}
