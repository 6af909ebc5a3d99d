//! Domain types and rules for the team wiki.
//!
//! Nothing in here touches the database or HTTP; the `db` and `api` crates
//! build on these types.

pub mod audit;
pub mod diff;
pub mod error;
pub mod notifications;
pub mod pages;
pub mod roles;
pub mod search;
pub mod types;
