//! Messages broadcast to editors and admins after content changes.
//!
//! The wording is German to match the seeded content the UI ships with.

pub fn page_created_message(title: &str) -> String {
    format!("Neue Seite erstellt: {title}")
}

pub fn page_updated_message(title: &str) -> String {
    format!("Seite aktualisiert: {title}")
}

pub const NEW_COMMENT_MESSAGE: &str = "Neuer Kommentar veröffentlicht";
