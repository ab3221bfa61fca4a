//! Input normalisation: trim, lowercase, accent folding.
//!
//! All matching in this crate runs on normalised text, so keyword sets and
//! marker-word lists are stored pre-folded. Folding uses a single fixed
//! substitution table applied in one pass; characters outside the table pass
//! through unchanged.

/// Normalise user text for matching.
///
/// Trims leading/trailing whitespace, lowercases, and folds accented Latin
/// vowels and `ç` to their unaccented equivalents. Empty input yields an
/// empty string; this function never fails.
///
/// # Examples
///
/// ```
/// assert_eq!(palavra_emotion::normalize::normalize("  Coração  "), "coracao");
/// ```
pub fn normalize(text: &str) -> String {
    text.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(fold_accent)
        .collect()
}

/// Fold one accented character to its base form. The table covers the
/// accented Latin vowels used in Portuguese plus `ç`.
fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        _ => c,
    }
}
