//! Database models with SQLx FromRow derives

mod article;
mod comment;
mod favorite;
mod like;
mod notification;
mod profile;
mod rating;
mod user;

pub use article::ArticleModel;
pub use comment::CommentModel;
pub use favorite::FavoriteModel;
pub use like::LikeModel;
pub use notification::NotificationModel;
pub use profile::ProfileModel;
pub use rating::{RatingModel, RatingSummaryModel};
pub use user::UserModel;
