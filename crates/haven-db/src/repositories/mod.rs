//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in haven-core.
//! Each repository handles database operations for a specific domain entity.

mod article;
mod comment;
mod error;
mod favorite;
mod like;
mod notification;
mod profile;
mod rating;
mod user;

pub use article::PgArticleRepository;
pub use comment::PgCommentRepository;
pub use favorite::PgFavoriteRepository;
pub use like::PgLikeRepository;
pub use notification::PgNotificationRepository;
pub use profile::PgProfileRepository;
pub use rating::PgRatingRepository;
pub use user::PgUserRepository;
