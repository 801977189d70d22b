//! Entity <-> model mappers

mod article;
mod comment;
mod favorite;
mod like;
mod notification;
mod profile;
mod rating;
mod user;

pub use article::article_with_tags;
