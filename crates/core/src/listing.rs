//! Listing primitives: pagination defaults, sort direction and the boolean
//! filter token parser used by list endpoints.

use crate::error::CoreError;

/// Default page size when `limit` is omitted.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Maximum page size a caller may request.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Query-string tokens (compared case-insensitively) that parse as `true`.
pub const TRUE_TOKENS: &[&str] = &["true", "1"];

/// Sort direction accepted by list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse a `sort_order` query value. Only `asc` and `desc` are accepted.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(CoreError::Validation(format!(
                "Invalid sort_order '{other}'. Valid values: asc, desc"
            ))),
        }
    }

    /// SQL keyword for this direction.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Interpret a query-string token as a boolean flag.
///
/// `"true"` and `"1"` (any letter case) are `true`; every other token,
/// including the empty string, is `false`.
pub fn parse_bool_flag(token: &str) -> bool {
    let token = token.trim().to_ascii_lowercase();
    TRUE_TOKENS.contains(&token.as_str())
}

/// Clamp a user-provided limit into `1..=max`, using `default` when absent.
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
    fn bool_flag_accepts_true_tokens_in_any_case() {
        assert!(parse_bool_flag("true"));
        assert!(parse_bool_flag("TRUE"));
        assert!(parse_bool_flag("True"));
        assert!(parse_bool_flag("1"));
    }

    #[test]
    fn bool_flag_defaults_to_false() {
        assert!(!parse_bool_flag("false"));
        assert!(!parse_bool_flag("0"));
        assert!(!parse_bool_flag("yes"));
        assert!(!parse_bool_flag(""));
    }

    #[test]
    fn sort_order_rejects_unknown_values() {
        assert_eq!(SortOrder::parse("asc").unwrap(), SortOrder::Asc);
        assert_eq!(SortOrder::parse("desc").unwrap(), SortOrder::Desc);
        assert!(SortOrder::parse("ASC").is_err());
        assert!(SortOrder::parse("sideways").is_err());
    }

    #[test]
    fn limit_and_offset_are_clamped() {
        assert_eq!(clamp_limit(None, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT), 10);
        assert_eq!(clamp_limit(Some(0), DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT), 1);
        assert_eq!(clamp_limit(Some(500), DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT), 100);
        assert_eq!(clamp_offset(None), 0);
        assert_eq!(clamp_offset(Some(-5)), 0);
        assert_eq!(clamp_offset(Some(30)), 30);
    }
}
