//! Page, version and tag rules shared by the repositories and handlers.

use crate::error::CoreError;

/// Number of pages shown in the dashboard's "recently updated" list.
pub const DASHBOARD_RECENT_PAGES: i64 = 5;

/// Maximum unread notifications shown on the dashboard.
pub const DASHBOARD_UNREAD_LIMIT: i64 = 10;

/// Version number given to the snapshot written alongside a new page.
pub const FIRST_VERSION: i32 = 1;

/// Next version number for a page that already has `existing` version rows.
///
/// Derived from a row count rather than an atomic counter, so two concurrent
/// edits can compute the same number; the unique `(page_id, version)`
/// constraint turns that collision into a conflict error.
pub fn next_version_number(existing: i64) -> Result<i32, CoreError> {
    i32::try_from(existing + 1)
        .map_err(|_| CoreError::Internal(format!("Version counter overflow at {existing}")))
}

/// Trim tag names, drop blanks and remove duplicates while keeping the
/// caller's order.
pub fn normalize_tag_names(names: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        let trimmed = name.trim();
        if trimmed.is_empty() || out.iter().any(|n| n == trimmed) {
            continue;
        }
        out.push(trimmed.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_update_gets_version_two() {
        assert_eq!(next_version_number(1).unwrap(), 2);
        assert_eq!(next_version_number(0).unwrap(), FIRST_VERSION);
    }

    #[test]
    fn version_overflow_is_an_error() {
        assert!(next_version_number(i64::from(i32::MAX)).is_err());
    }

    #[test]
    fn tag_names_are_trimmed_and_deduplicated() {
        let input = vec![
            " guide".to_string(),
            "start".to_string(),
            "guide ".to_string(),
            "   ".to_string(),
            "Guide".to_string(),
        ];
        assert_eq!(normalize_tag_names(&input), vec!["guide", "start", "Guide"]);
    }

    #[test]
    fn empty_tag_list_stays_empty() {
        assert!(normalize_tag_names(&[]).is_empty());
    }
}
