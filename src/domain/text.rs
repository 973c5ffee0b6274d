//! Small text helpers shared by the value objects

/// Return the trimmed value, or `None` when it is empty or whitespace-only
pub fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Same as [`non_blank`] for optional fields
pub fn non_blank_opt(value: Option<&str>) -> Option<&str> {
    value.and_then(non_blank)
}

/// Normalize a categorical value into a lookup key.
///
/// Lower-cases, folds `-` and `_` into spaces and collapses whitespace runs,
/// so "Golden-Hour", "golden_hour" and "  golden   hour " share one key.
pub fn normalize_key(value: &str) -> String {
    value
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_trims() {
        assert_eq!(non_blank("  a b "), Some("a b"));
        assert_eq!(non_blank(" \n "), None);
        assert_eq!(non_blank_opt(None), None);
        assert_eq!(non_blank_opt(Some("")), None);
    }

    #[test]
    fn normalize_key_folds_separators_and_case() {
        assert_eq!(normalize_key("Golden-Hour"), "golden hour");
        assert_eq!(normalize_key("golden_hour"), "golden hour");
        assert_eq!(normalize_key("  GOLDEN   hour "), "golden hour");
    }
}
