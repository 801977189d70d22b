//! Domain entities - core business objects

mod article;
mod comment;
mod favorite;
mod like;
mod notification;
mod profile;
mod rating;
mod user;

pub use article::Article;
pub use comment::{Comment, COMMENT_MAX_LEN};
pub use favorite::Favorite;
pub use like::Like;
pub use notification::Notification;
pub use profile::Profile;
pub use rating::{Rating, RatingSummary, RATING_MAX, RATING_MIN};
pub use user::User;
