//! List numbering token recognition.
//!
//! The vocabulary is closed: decimal numbers 1-49 and the first 21 Greek
//! ordinals, each as `N.`, `(N)` or `N/`.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::model::{IndexStyle, ListIndex, Numeral};

/// Greek ordinal letter-forms, in order.
pub const GREEK_ORDINALS: [&str; 21] = [
    "α", "β", "γ", "δ", "ε", "στ", "ζ", "η", "θ", "ι", "ια", "ιβ", "ιγ", "ιδ", "ιε", "ιστ", "ιζ",
    "ιη", "ιθ", "κ", "κα",
];

/// Highest decimal list number.
pub const MAX_ARABIC: u8 = 49;

const STYLES: [IndexStyle; 3] = [IndexStyle::Dot, IndexStyle::Paren, IndexStyle::Slash];

static VOCABULARY: Lazy<HashMap<String, (Numeral, IndexStyle)>> = Lazy::new(|| {
    let mut vocabulary = HashMap::with_capacity(STYLES.len() * (MAX_ARABIC as usize + 21));
    for style in STYLES {
        for n in 1..=MAX_ARABIC {
            vocabulary.insert(style.format(&n.to_string()), (Numeral::Arabic(n), style));
        }
        for (position, letter) in (1u8..).zip(GREEK_ORDINALS) {
            vocabulary.insert(style.format(letter), (Numeral::Greek(position), style));
        }
    }
    vocabulary
});

/// Match a token against the numbering vocabulary.
pub fn match_index(token: &str) -> Option<ListIndex> {
    VOCABULARY.get(token).map(|&(numeral, style)| ListIndex {
        token: token.to_string(),
        numeral,
        style,
    })
}

/// Check if a token is a numbering token.
pub fn is_index(token: &str) -> bool {
    VOCABULARY.contains_key(token)
}

/// Greek ordinal letter for a 1-based position.
pub fn greek_ordinal(position: usize) -> Option<&'static str> {
    position
        .checked_sub(1)
        .and_then(|i| GREEK_ORDINALS.get(i))
        .copied()
}
