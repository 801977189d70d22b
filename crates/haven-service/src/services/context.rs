//! Shared service dependencies.

use std::sync::Arc;

use haven_common::auth::JwtService;
use haven_common::config::MailConfig;
use haven_common::mail::MailSender;
use haven_core::traits::{
    ArticleRepository, CommentRepository, FavoriteRepository, LikeRepository,
    NotificationRepository, ProfileRepository, RatingRepository, UserRepository,
};
use haven_core::{Snowflake, SnowflakeGenerator};
use sqlx::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Everything the services need, wired once at startup.
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,
    user_repo: Arc<dyn UserRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
    article_repo: Arc<dyn ArticleRepository>,
    rating_repo: Arc<dyn RatingRepository>,
    like_repo: Arc<dyn LikeRepository>,
    favorite_repo: Arc<dyn FavoriteRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    notification_repo: Arc<dyn NotificationRepository>,
    jwt_service: Arc<JwtService>,
    mail_sender: Arc<dyn MailSender>,
    mail_config: MailConfig,
    id_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::default()
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    pub fn article_repo(&self) -> &dyn ArticleRepository {
        self.article_repo.as_ref()
    }

    pub fn rating_repo(&self) -> &dyn RatingRepository {
        self.rating_repo.as_ref()
    }

    pub fn like_repo(&self) -> &dyn LikeRepository {
        self.like_repo.as_ref()
    }

    pub fn favorite_repo(&self) -> &dyn FavoriteRepository {
        self.favorite_repo.as_ref()
    }

    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    pub fn notification_repo(&self) -> &dyn NotificationRepository {
        self.notification_repo.as_ref()
    }

    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    pub fn mail_sender(&self) -> &dyn MailSender {
        self.mail_sender.as_ref()
    }

    pub fn mail_config(&self) -> &MailConfig {
        &self.mail_config
    }

    pub fn next_id(&self) -> Snowflake {
        self.id_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext").finish_non_exhaustive()
    }
}

#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    article_repo: Option<Arc<dyn ArticleRepository>>,
    rating_repo: Option<Arc<dyn RatingRepository>>,
    like_repo: Option<Arc<dyn LikeRepository>>,
    favorite_repo: Option<Arc<dyn FavoriteRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    notification_repo: Option<Arc<dyn NotificationRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    mail_sender: Option<Arc<dyn MailSender>>,
    mail_config: Option<MailConfig>,
    id_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    #[must_use]
    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    #[must_use]
    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn article_repo(mut self, repo: Arc<dyn ArticleRepository>) -> Self {
        self.article_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn rating_repo(mut self, repo: Arc<dyn RatingRepository>) -> Self {
        self.rating_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn like_repo(mut self, repo: Arc<dyn LikeRepository>) -> Self {
        self.like_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn favorite_repo(mut self, repo: Arc<dyn FavoriteRepository>) -> Self {
        self.favorite_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn notification_repo(mut self, repo: Arc<dyn NotificationRepository>) -> Self {
        self.notification_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    #[must_use]
    pub fn mail_sender(mut self, sender: Arc<dyn MailSender>) -> Self {
        self.mail_sender = Some(sender);
        self
    }

    #[must_use]
    pub fn mail_config(mut self, config: MailConfig) -> Self {
        self.mail_config = Some(config);
        self
    }

    #[must_use]
    pub fn id_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.id_generator = Some(generator);
        self
    }

    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            pool: self
                .pool
                .ok_or_else(|| ServiceError::internal("ServiceContext requires a database pool"))?,
            user_repo: self
                .user_repo
                .ok_or_else(|| ServiceError::internal("ServiceContext requires a user repository"))?,
            profile_repo: self.profile_repo.ok_or_else(|| {
                ServiceError::internal("ServiceContext requires a profile repository")
            })?,
            article_repo: self.article_repo.ok_or_else(|| {
                ServiceError::internal("ServiceContext requires an article repository")
            })?,
            rating_repo: self.rating_repo.ok_or_else(|| {
                ServiceError::internal("ServiceContext requires a rating repository")
            })?,
            like_repo: self
                .like_repo
                .ok_or_else(|| ServiceError::internal("ServiceContext requires a like repository"))?,
            favorite_repo: self.favorite_repo.ok_or_else(|| {
                ServiceError::internal("ServiceContext requires a favorite repository")
            })?,
            comment_repo: self.comment_repo.ok_or_else(|| {
                ServiceError::internal("ServiceContext requires a comment repository")
            })?,
            notification_repo: self.notification_repo.ok_or_else(|| {
                ServiceError::internal("ServiceContext requires a notification repository")
            })?,
            jwt_service: self
                .jwt_service
                .ok_or_else(|| ServiceError::internal("ServiceContext requires a JWT service"))?,
            mail_sender: self
                .mail_sender
                .ok_or_else(|| ServiceError::internal("ServiceContext requires a mail sender"))?,
            mail_config: self
                .mail_config
                .ok_or_else(|| ServiceError::internal("ServiceContext requires mail settings"))?,
            id_generator: self
                .id_generator
                .ok_or_else(|| ServiceError::internal("ServiceContext requires an id generator"))?,
        })
    }
}
