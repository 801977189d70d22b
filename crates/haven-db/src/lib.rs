//! # haven-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `haven-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity <-> Model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use haven_db::pool::{create_pool, DatabaseConfig};
//! use haven_db::repositories::PgArticleRepository;
//! use haven_core::traits::ArticleRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let article_repo = PgArticleRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgArticleRepository, PgCommentRepository, PgFavoriteRepository, PgLikeRepository,
    PgNotificationRepository, PgProfileRepository, PgRatingRepository, PgUserRepository,
};
