//! Audit log vocabulary.
//!
//! Audit rows are append-only; these constants are the only action and
//! entity-type values the API writes.

pub const ACTION_PAGE_CREATE: &str = "PAGE_CREATE";
pub const ACTION_PAGE_UPDATE: &str = "PAGE_UPDATE";
pub const ACTION_PAGE_RESTORE: &str = "PAGE_RESTORE";
pub const ACTION_PAGE_DELETE: &str = "PAGE_DELETE";
pub const ACTION_COMMENT_CREATE: &str = "COMMENT_CREATE";

pub const ENTITY_PAGE: &str = "Page";
pub const ENTITY_COMMENT: &str = "Comment";

pub fn page_created_details(title: &str) -> String {
    format!("Created page {title}")
}

pub fn page_updated_details(title: &str) -> String {
    format!("Updated page {title}")
}

pub fn page_restored_details(version: i32) -> String {
    format!("Restored page to version {version}")
}

pub fn page_deleted_details(title: &str) -> String {
    format!("Deleted page {title}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_details_name_the_version() {
        assert_eq!(page_restored_details(3), "Restored page to version 3");
    }

    #[test]
    fn delete_details_keep_the_old_title() {
        assert_eq!(page_deleted_details("Onboarding"), "Deleted page Onboarding");
    }
}
