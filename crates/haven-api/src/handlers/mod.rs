//! HTTP request handlers.

pub mod articles;
pub mod auth;
pub mod comments;
pub mod health;
pub mod interactions;
pub mod notifications;
pub mod profiles;
