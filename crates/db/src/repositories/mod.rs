//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod audit_repo;
pub mod comment_repo;
pub mod notification_repo;
pub mod page_repo;
pub mod page_version_repo;
pub mod tag_repo;
pub mod user_repo;

pub use audit_repo::AuditLogRepo;
pub use comment_repo::CommentRepo;
pub use notification_repo::NotificationRepo;
pub use page_repo::PageRepo;
pub use page_version_repo::PageVersionRepo;
pub use tag_repo::TagRepo;
pub use user_repo::UserRepo;
