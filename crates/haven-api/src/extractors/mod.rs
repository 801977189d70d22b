//! Request extractors.

pub mod auth;
pub mod pagination;
pub mod validated;

pub use auth::{AuthUser, OptionalAuthUser};
pub use pagination::Pagination;
pub use validated::ValidatedJson;
