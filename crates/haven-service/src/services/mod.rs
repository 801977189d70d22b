//! Business logic services.

pub mod article;
pub mod auth;
pub mod comment;
pub mod context;
pub mod error;
pub mod favorite;
pub mod like;
pub mod notification;
pub mod profile;
pub mod rating;
pub mod search;

pub use article::ArticleService;
pub use auth::AuthService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use favorite::FavoriteService;
pub use like::LikeService;
pub use notification::NotificationService;
pub use profile::ProfileService;
pub use rating::RatingService;
pub use search::SearchService;
