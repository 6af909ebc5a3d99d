//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` struct matching the database row
//! - The projections the API returns (never exposing password hashes)
//! - `Deserialize` + `Validate` request DTOs where the resource accepts input

pub mod audit;
pub mod comment;
pub mod dashboard;
pub mod notification;
pub mod page;
pub mod page_version;
pub mod tag;
pub mod user;
