//! Catalog search constants and helpers.
//!
//! Lives in `core` so the repository layer and the API handlers agree on the
//! same limits and on how user text becomes a SQL `ILIKE` pattern.

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Default page size for catalog list endpoints.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Maximum page size for catalog list endpoints.
pub const MAX_LIST_LIMIT: i64 = 200;

/// Per-group cap for the unified `/search` endpoint.
pub const SEARCH_GROUP_LIMIT: i64 = 10;

/// Number of entries in each home-page widget.
pub const HOME_WIDGET_LIMIT: i64 = 5;

// ---------------------------------------------------------------------------
// Query helpers
// ---------------------------------------------------------------------------

/// Normalize an optional query string: trims and drops empty input.
///
/// ```
/// use mfc_core::search::normalize_query;
/// assert_eq!(normalize_query(Some("  паспорт ")), Some("паспорт".to_string()));
/// assert_eq!(normalize_query(Some("   ")), None);
/// assert_eq!(normalize_query(None), None);
/// ```
pub fn normalize_query(q: Option<&str>) -> Option<String> {
    q.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Build a substring `ILIKE` pattern, escaping LIKE metacharacters.
///
/// PostgreSQL treats `\` as the default escape character, so `%`, `_` and
/// `\` in user input are matched literally.
///
/// ```
/// use mfc_core::search::contains_pattern;
/// assert_eq!(contains_pattern("пас"), "%пас%");
/// assert_eq!(contains_pattern("100%"), "%100\\%%");
/// ```
pub fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_escapes_underscore_and_backslash() {
        assert_eq!(contains_pattern("a_b\\c"), "%a\\_b\\\\c%");
    }

    #[test]
    fn pattern_keeps_cyrillic_untouched() {
        assert_eq!(contains_pattern("Замена"), "%Замена%");
    }

    #[test]
    fn pattern_of_empty_query_matches_everything() {
        assert_eq!(contains_pattern(""), "%%");
    }

    #[test]
    fn clamp_limit_uses_default_when_none() {
        assert_eq!(clamp_limit(None, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT), 50);
    }

    #[test]
    fn clamp_limit_respects_max_and_floor() {
        assert_eq!(clamp_limit(Some(1_000), 50, 200), 200);
        assert_eq!(clamp_limit(Some(0), 50, 200), 1);
        assert_eq!(clamp_limit(Some(-3), 50, 200), 1);
    }

    #[test]
    fn clamp_offset_floors_at_zero() {
        assert_eq!(clamp_offset(Some(-10)), 0);
        assert_eq!(clamp_offset(Some(40)), 40);
        assert_eq!(clamp_offset(None), 0);
    }
}
