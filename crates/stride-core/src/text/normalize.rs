use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize raw text into the search alphabet `A`-`Z`.
///
/// Steps:
/// 1. Canonical decomposition (NFD), so `é` becomes `e` + U+0301
/// 2. Drop combining marks
/// 3. Uppercase (`ß` expands to `SS`)
/// 4. Keep ASCII uppercase letters only: digits, whitespace, punctuation,
///    quotes, brackets and any non-Latin letters are removed
pub fn normalize_text(raw: &str) -> String {
    raw.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_uppercase)
        .collect()
}
