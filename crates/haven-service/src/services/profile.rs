//! Public profiles and the follow graph.

use haven_core::{DomainError, Profile, Snowflake};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::requests::UpdateProfileRequest;
use crate::dto::responses::{FollowersResponse, ProfileResponse};
use crate::services::context::ServiceContext;
use crate::services::error::ServiceResult;

pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn get(&self, username: &str) -> ServiceResult<ProfileResponse> {
        let profile = self.find_by_username(username).await?;
        Ok(ProfileResponse::from(&profile))
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        user_id: Snowflake,
        request: UpdateProfileRequest,
    ) -> ServiceResult<ProfileResponse> {
        request.validate()?;

        let mut profile = self
            .ctx
            .profile_repo()
            .find_by_user_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;
        profile.update(request.bio, request.image);
        self.ctx.profile_repo().update(&profile).await?;

        Ok(ProfileResponse::from(&profile))
    }

    /// Follow `username` and return their refreshed profile.
    #[instrument(skip(self))]
    pub async fn follow(
        &self,
        follower_id: Snowflake,
        username: &str,
    ) -> ServiceResult<ProfileResponse> {
        let target = self.find_by_username(username).await?;
        if target.user_id == follower_id {
            return Err(DomainError::CannotFollowSelf.into());
        }

        self.ctx
            .profile_repo()
            .follow(follower_id, target.user_id)
            .await?;
        info!(follower = %follower_id, followee = %target.user_id, "follow created");

        let profile = self.find_by_username(username).await?;
        Ok(ProfileResponse::from(&profile))
    }

    #[instrument(skip(self))]
    pub async fn unfollow(
        &self,
        follower_id: Snowflake,
        username: &str,
    ) -> ServiceResult<ProfileResponse> {
        let target = self.find_by_username(username).await?;
        if target.user_id == follower_id {
            return Err(DomainError::CannotFollowSelf.into());
        }

        self.ctx
            .profile_repo()
            .unfollow(follower_id, target.user_id)
            .await?;
        info!(follower = %follower_id, followee = %target.user_id, "follow removed");

        let profile = self.find_by_username(username).await?;
        Ok(ProfileResponse::from(&profile))
    }

    /// Usernames of everyone following `username`.
    #[instrument(skip(self))]
    pub async fn followers(&self, username: &str) -> ServiceResult<FollowersResponse> {
        let target = self.find_by_username(username).await?;
        let followers = self
            .ctx
            .profile_repo()
            .follower_usernames(target.user_id)
            .await?;
        let count = followers.len();
        Ok(FollowersResponse { followers, count })
    }

    async fn find_by_username(&self, username: &str) -> ServiceResult<Profile> {
        Ok(self
            .ctx
            .profile_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::ProfileNotFound(username.to_string()))?)
    }
}
