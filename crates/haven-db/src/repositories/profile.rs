//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use haven_core::entities::Profile;
use haven_core::error::DomainError;
use haven_core::traits::{ProfileRepository, RepoResult};
use haven_core::value_objects::Snowflake;

use crate::models::ProfileModel;

use super::error::{map_db_error, map_unique_violation, profile_not_found};

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Create a new PgProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_user_id(&self, user_id: Snowflake) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(
            r"
            SELECT p.user_id, u.username, p.bio, p.image, p.followers, p.following,
                   p.created_at, p.updated_at
            FROM profiles p
            JOIN users u ON u.id = p.user_id
            WHERE p.user_id = $1 AND u.active = TRUE
            ",
        )
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(
            r"
            SELECT p.user_id, u.username, p.bio, p.image, p.followers, p.following,
                   p.created_at, p.updated_at
            FROM profiles p
            JOIN users u ON u.id = p.user_id
            WHERE u.username = $1 AND u.active = TRUE
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self))]
    async fn update(&self, profile: &Profile) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE profiles
            SET bio = $2, image = $3, updated_at = NOW()
            WHERE user_id = $1
            ",
        )
        .bind(profile.user_id.into_inner())
        .bind(&profile.bio)
        .bind(&profile.image)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(profile_not_found(&profile.username));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn is_following(&self, follower: Snowflake, followee: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM follows WHERE follower_id = $1 AND followee_id = $2
            )
            ",
        )
        .bind(follower.into_inner())
        .bind(followee.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn follow(&self, follower: Snowflake, followee: Snowflake) -> RepoResult<()> {
        // Edge insert and both counter bumps commit together
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO follows (follower_id, followee_id, created_at)
            VALUES ($1, $2, NOW())
            ",
        )
        .bind(follower.into_inner())
        .bind(followee.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyFollowing))?;

        sqlx::query(
            r"
            UPDATE profiles SET following = following + 1, updated_at = NOW()
            WHERE user_id = $1
            ",
        )
        .bind(follower.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r"
            UPDATE profiles SET followers = followers + 1, updated_at = NOW()
            WHERE user_id = $1
            ",
        )
        .bind(followee.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn unfollow(&self, follower: Snowflake, followee: Snowflake) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            DELETE FROM follows WHERE follower_id = $1 AND followee_id = $2
            ",
        )
        .bind(follower.into_inner())
        .bind(followee.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFollowing);
        }

        sqlx::query(
            r"
            UPDATE profiles SET following = GREATEST(following - 1, 0), updated_at = NOW()
            WHERE user_id = $1
            ",
        )
        .bind(follower.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r"
            UPDATE profiles SET followers = GREATEST(followers - 1, 0), updated_at = NOW()
            WHERE user_id = $1
            ",
        )
        .bind(followee.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn follower_ids(&self, user_id: Snowflake) -> RepoResult<Vec<Snowflake>> {
        let results = sqlx::query_scalar::<_, i64>(
            r"
            SELECT follower_id FROM follows WHERE followee_id = $1 ORDER BY created_at
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Snowflake::new).collect())
    }

    #[instrument(skip(self))]
    async fn follower_usernames(&self, user_id: Snowflake) -> RepoResult<Vec<String>> {
        let results = sqlx::query_scalar::<_, String>(
            r"
            SELECT u.username
            FROM follows f
            JOIN users u ON u.id = f.follower_id
            WHERE f.followee_id = $1
            ORDER BY f.created_at
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results)
    }
}
