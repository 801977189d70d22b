//! # haven-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Article, Comment, Favorite, Like, Notification, Profile, Rating, RatingSummary, User,
    COMMENT_MAX_LEN, RATING_MAX, RATING_MIN,
};
pub use error::DomainError;
pub use traits::{
    ArticleFilter, ArticleRepository, CommentRepository, FavoriteRepository, LikeRepository,
    NotificationRepository, ProfileRepository, RatingRepository, RepoResult, UserRepository,
};
pub use value_objects::{slugify, Slug, Snowflake, SnowflakeGenerator, SnowflakeParseError};
