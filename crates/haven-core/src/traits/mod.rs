//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ArticleFilter, ArticleRepository, CommentRepository, FavoriteRepository, LikeRepository,
    NotificationRepository, ProfileRepository, RatingRepository, RepoResult, UserRepository,
};
