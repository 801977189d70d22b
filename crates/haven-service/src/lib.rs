//! # haven-service
//!
//! Application layer: request/response DTOs and the services that
//! implement registration, profiles, articles, interactions,
//! notifications, and search on top of the repositories.

pub mod dto;
pub mod services;

pub use services::{
    ArticleService, AuthService, CommentService, FavoriteService, LikeService,
    NotificationService, ProfileService, RatingService, SearchService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
