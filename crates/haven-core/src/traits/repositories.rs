//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Operations with cross-entity atomicity
//! requirements (follow counters, publish fanout) are single trait methods
//! so the implementation can run them in one database transaction.

use async_trait::async_trait;

use crate::entities::{
    Article, Comment, Favorite, Like, Notification, Profile, Rating, RatingSummary, User,
};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if email is already registered
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Check if username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Create a new user together with its empty profile
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: Snowflake, password_hash: &str) -> RepoResult<()>;

    /// Flip the verified flag after email confirmation
    async fn set_verified(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Profile Repository (social graph)
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find profile by its owning user ID
    async fn find_by_user_id(&self, user_id: Snowflake) -> RepoResult<Option<Profile>>;

    /// Find profile by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Profile>>;

    /// Update bio/image
    async fn update(&self, profile: &Profile) -> RepoResult<()>;

    /// Check whether `follower` currently follows `followee`
    async fn is_following(&self, follower: Snowflake, followee: Snowflake) -> RepoResult<bool>;

    /// Insert the follow edge and bump both denormalized counters in one
    /// transaction
    async fn follow(&self, follower: Snowflake, followee: Snowflake) -> RepoResult<()>;

    /// Remove the follow edge and decrement both counters in one transaction
    async fn unfollow(&self, follower: Snowflake, followee: Snowflake) -> RepoResult<()>;

    /// User IDs of everyone following `user_id`
    async fn follower_ids(&self, user_id: Snowflake) -> RepoResult<Vec<Snowflake>>;

    /// Usernames of everyone following `user_id`
    async fn follower_usernames(&self, user_id: Snowflake) -> RepoResult<Vec<String>>;
}

// ============================================================================
// Article Repository
// ============================================================================

/// Search filters; any combination may be supplied
#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    /// Case-insensitive substring on the title (whitespace already collapsed)
    pub title: Option<String>,
    /// Case-insensitive substring on the author's username
    pub author: Option<String>,
    /// Exact, case-sensitive tag membership
    pub tag: Option<String>,
}

impl ArticleFilter {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.tag.is_none()
    }
}

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Find article by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Article>>;

    /// Find article by slug
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Article>>;

    /// Create a new article with its tag set
    async fn create(&self, article: &Article) -> RepoResult<()>;

    /// Update an existing article (including its tag set)
    async fn update(&self, article: &Article) -> RepoResult<()>;

    /// Update the article and insert the given notifications in one
    /// transaction; used for the publish fanout so a crash can never leave
    /// article state and notification rows inconsistent
    async fn update_with_notifications(
        &self,
        article: &Article,
        notifications: &[Notification],
    ) -> RepoResult<()>;

    /// Delete an article
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// All published articles, newest first
    async fn list_published(&self, limit: i64, offset: i64) -> RepoResult<Vec<Article>>;

    /// All articles of one author, newest first
    async fn list_by_author(
        &self,
        author_id: Snowflake,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<Article>>;

    /// Published articles matching the filter combination
    async fn search(&self, filter: &ArticleFilter) -> RepoResult<Vec<Article>>;
}

// ============================================================================
// Rating Repository
// ============================================================================

#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Find an existing rating for (article, user)
    async fn find(&self, article_id: Snowflake, user_id: Snowflake)
        -> RepoResult<Option<Rating>>;

    /// Insert a rating
    async fn create(&self, rating: &Rating) -> RepoResult<()>;

    /// Arithmetic mean and count of all ratings for an article
    async fn summary(&self, article_id: Snowflake) -> RepoResult<RatingSummary>;
}

// ============================================================================
// Like Repository
// ============================================================================

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Find an existing opinion row for (article, user)
    async fn find(&self, article_id: Snowflake, user_id: Snowflake) -> RepoResult<Option<Like>>;

    /// Insert an opinion row
    async fn create(&self, like: &Like) -> RepoResult<()>;

    /// Change the stored opinion value
    async fn update(&self, article_id: Snowflake, user_id: Snowflake, liked: bool)
        -> RepoResult<()>;

    /// Remove the opinion row
    async fn delete(&self, article_id: Snowflake, user_id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Favorite Repository
// ============================================================================

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Check whether (article, user) is favorited
    async fn exists(&self, article_id: Snowflake, user_id: Snowflake) -> RepoResult<bool>;

    /// Insert a favorite row
    async fn create(&self, favorite: &Favorite) -> RepoResult<()>;

    /// Delete the favorite row
    async fn delete(&self, article_id: Snowflake, user_id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    /// Find a top-level comment on an article (candidate thread parent)
    async fn find_parent(
        &self,
        article_id: Snowflake,
        comment_id: Snowflake,
    ) -> RepoResult<Option<Comment>>;

    /// A user's comment on an article; `child` selects the threaded row
    async fn find_by_article_author(
        &self,
        article_id: Snowflake,
        author_id: Snowflake,
        child: bool,
    ) -> RepoResult<Option<Comment>>;

    /// All comments on an article, oldest first
    async fn list_by_article(&self, article_id: Snowflake) -> RepoResult<Vec<Comment>>;

    /// Insert a comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Update a comment body
    async fn update(&self, comment: &Comment) -> RepoResult<()>;

    /// Delete a user's comments on an article, returning how many rows went
    async fn delete_by_article_author(
        &self,
        article_id: Snowflake,
        author_id: Snowflake,
    ) -> RepoResult<u64>;
}

// ============================================================================
// Notification Repository
// ============================================================================

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// All notifications owned by a user, newest first
    async fn list_by_owner(&self, owner_id: Snowflake) -> RepoResult<Vec<Notification>>;

    /// Unread notifications owned by a user
    async fn list_unread(&self, owner_id: Snowflake) -> RepoResult<Vec<Notification>>;

    /// IDs of the unread notifications owned by a user
    async fn unread_ids(&self, owner_id: Snowflake) -> RepoResult<Vec<Snowflake>>;

    /// Flip read_status=true for the given ids owned by `owner_id`
    async fn mark_read(&self, owner_id: Snowflake, ids: &[Snowflake]) -> RepoResult<()>;
}
