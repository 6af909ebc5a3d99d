pub mod auth;
pub mod comments;
pub mod dashboard;
pub mod notifications;
pub mod pages;
pub mod search;
