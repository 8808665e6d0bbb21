//! Monogram derivation
//!
//! The monogram is the single character shown inside a card's circular
//! avatar placeholder.

/// Character shown when no usable monogram can be derived.
pub const FALLBACK_MONOGRAM: char = '名';

/// Derive a monogram from a commenter's full name.
///
/// The name is trimmed and split on runs of spaces (ASCII space and the
/// full-width ideographic space U+3000 both count); the monogram is the
/// first character of the first non-empty token. An empty or
/// whitespace-only name yields [`FALLBACK_MONOGRAM`].
pub fn derive_monogram(full_name: &str) -> char {
    let trimmed = full_name.trim();
    if trimmed.is_empty() {
        return FALLBACK_MONOGRAM;
    }
    trimmed
        .split(|c: char| c == ' ' || c == '\u{3000}')
        .find(|token| !token.is_empty())
        .and_then(|token| token.chars().next())
        .or_else(|| trimmed.chars().next())
        .unwrap_or(FALLBACK_MONOGRAM)
}

/// Resolve the monogram for a card.
///
/// A non-empty explicit override wins over derivation; only its first
/// character (after trimming) is used. An override that trims down to
/// nothing collapses to [`FALLBACK_MONOGRAM`] rather than re-deriving
/// from the name.
pub fn resolve_monogram(explicit: Option<&str>, commenter_name: &str) -> char {
    match explicit {
        Some(m) if !m.is_empty() => m.trim().chars().next().unwrap_or(FALLBACK_MONOGRAM),
        _ => derive_monogram(commenter_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_name_first_character() {
        assert_eq!(derive_monogram("田中 太郎"), '田');
    }

    #[test]
    fn test_no_separator_takes_first_character() {
        assert_eq!(derive_monogram("TaroTanaka"), 'T');
    }

    #[test]
    fn test_empty_name_falls_back() {
        assert_eq!(derive_monogram(""), FALLBACK_MONOGRAM);
        assert_eq!(derive_monogram("   "), FALLBACK_MONOGRAM);
        assert_eq!(derive_monogram("\u{3000}"), FALLBACK_MONOGRAM);
    }

    #[test]
    fn test_leading_fullwidth_space() {
        assert_eq!(derive_monogram("\u{3000}花子"), '花');
    }

    #[test]
    fn test_fullwidth_separator() {
        assert_eq!(derive_monogram("佐藤\u{3000}花子"), '佐');
    }

    #[test]
    fn test_explicit_override_wins() {
        assert_eq!(resolve_monogram(Some("Z"), "田中 太郎"), 'Z');
    }

    #[test]
    fn test_override_uses_first_character_only() {
        assert_eq!(resolve_monogram(Some("ABC"), "田中 太郎"), 'A');
    }

    #[test]
    fn test_empty_override_derives_from_name() {
        assert_eq!(resolve_monogram(Some(""), "田中 太郎"), '田');
        assert_eq!(resolve_monogram(None, "田中 太郎"), '田');
    }

    #[test]
    fn test_whitespace_override_falls_back() {
        assert_eq!(resolve_monogram(Some("  "), "田中 太郎"), FALLBACK_MONOGRAM);
    }
}
