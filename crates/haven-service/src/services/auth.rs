//! Registration, login, email verification and token lifecycle.

use haven_common::{
    password_reset_email, validate_password_strength, verification_email, AppError,
    PasswordService,
};
use haven_core::{DomainError, Snowflake, User};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::requests::{
    ForgotPasswordRequest, LoginRequest, RefreshTokenRequest, RegisterRequest,
    ResetPasswordRequest, UpdateUserRequest,
};
use crate::dto::responses::{AuthResponse, CurrentUserResponse, MessageResponse};
use crate::services::context::ServiceContext;
use crate::services::error::{ServiceError, ServiceResult};

pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
    password: PasswordService,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self {
            ctx,
            password: PasswordService::new(),
        }
    }

    /// Register a new account and send the verification email.
    ///
    /// A mail delivery failure is logged but never fails the
    /// registration itself.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        request.validate()?;
        validate_username_charset(&request.username)?;
        validate_password_strength(&request.password)?;

        let email = request.email.trim().to_lowercase();
        if self.ctx.user_repo().email_exists(&email).await? {
            return Err(DomainError::EmailTaken.into());
        }
        if self
            .ctx
            .user_repo()
            .username_exists(&request.username)
            .await?
        {
            return Err(DomainError::UsernameTaken.into());
        }

        let user = User::new(self.ctx.next_id(), request.username, email);
        let password_hash = self.password.hash_password(&request.password)?;
        self.ctx.user_repo().create(&user, &password_hash).await?;

        let verify_token = self.ctx.jwt_service().generate_verify_token(user.id)?;
        let mail = verification_email(
            self.ctx.mail_config(),
            &user.username,
            &user.email,
            &verify_token,
        );
        if let Err(error) = self.ctx.mail_sender().send(mail).await {
            warn!(user_id = %user.id, %error, "failed to send verification email");
        }

        let tokens = self.ctx.jwt_service().generate_token_pair(user.id)?;
        info!(user_id = %user.id, "user registered");

        Ok(AuthResponse {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: tokens.token_type,
            expires_in: tokens.expires_in,
            user: CurrentUserResponse::from(&user),
        })
    }

    /// Authenticate with email and password.
    ///
    /// Unknown email and wrong password both come back as the same
    /// credentials error.
    #[instrument(skip(self, request))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        request.validate()?;

        let email = request.email.trim().to_lowercase();
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or(AppError::InvalidCredentials)?;
        if !self.password.verify_password(&request.password, &hash)? {
            warn!(user_id = %user.id, "login failed");
            return Err(AppError::InvalidCredentials.into());
        }

        let tokens = self.ctx.jwt_service().generate_token_pair(user.id)?;
        info!(user_id = %user.id, "user logged in");

        Ok(AuthResponse {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: tokens.token_type,
            expires_in: tokens.expires_in,
            user: CurrentUserResponse::from(&user),
        })
    }

    /// Activate an account from the emailed verification token.
    #[instrument(skip(self, token))]
    pub async fn verify_email(&self, token: &str) -> ServiceResult<MessageResponse> {
        let user_id = self.ctx.jwt_service().validate_verify_token(token)?;
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        if !user.verified {
            self.ctx.user_repo().set_verified(user.id).await?;
            info!(user_id = %user.id, "account verified");
        }
        Ok(MessageResponse::new("Your account has been verified."))
    }

    /// Email a short-lived password reset link to an existing account.
    ///
    /// Unlike registration, a mail delivery failure here fails the
    /// request, since the email is the whole point of the operation.
    #[instrument(skip(self, request))]
    pub async fn forgot_password(
        &self,
        request: ForgotPasswordRequest,
    ) -> ServiceResult<MessageResponse> {
        request.validate()?;

        let email = request.email.trim().to_lowercase();
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                ServiceError::validation("No account is registered with this email")
            })?;

        let reset_token = self.ctx.jwt_service().generate_reset_token(user.id)?;
        let mail = password_reset_email(
            self.ctx.mail_config(),
            &user.username,
            &user.email,
            &reset_token,
        );
        self.ctx.mail_sender().send(mail).await?;
        info!(user_id = %user.id, "password reset email sent");

        Ok(MessageResponse::new(format!(
            "A password reset link has been sent to {email}, please check your email"
        )))
    }

    /// Set a new password from an emailed reset token.
    #[instrument(skip(self, token, request))]
    pub async fn reset_password(
        &self,
        token: &str,
        request: ResetPasswordRequest,
    ) -> ServiceResult<MessageResponse> {
        request.validate()?;
        validate_password_strength(&request.new_password)?;

        let user_id = self.ctx.jwt_service().validate_reset_token(token)?;
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::InvalidToken)?;

        let hash = self.password.hash_password(&request.new_password)?;
        self.ctx.user_repo().update_password(user.id, &hash).await?;
        info!(user_id = %user.id, "password reset");

        Ok(MessageResponse::new("Password has been successfully reset"))
    }

    /// Exchange a refresh token for a fresh pair.
    #[instrument(skip(self, request))]
    pub async fn refresh(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        request.validate()?;

        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)?;
        let user_id = claims.user_id()?;
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::InvalidToken)?;

        let tokens = self
            .ctx
            .jwt_service()
            .refresh_tokens(&request.refresh_token)?;

        Ok(AuthResponse {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: tokens.token_type,
            expires_in: tokens.expires_in,
            user: CurrentUserResponse::from(&user),
        })
    }

    #[instrument(skip(self))]
    pub async fn current_user(&self, user_id: Snowflake) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;
        Ok(CurrentUserResponse::from(&user))
    }

    /// Update email and/or password of the authenticated user.
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        user_id: Snowflake,
        request: UpdateUserRequest,
    ) -> ServiceResult<CurrentUserResponse> {
        request.validate()?;

        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        if let Some(email) = request.email {
            let email = email.trim().to_lowercase();
            if email != user.email {
                if self.ctx.user_repo().email_exists(&email).await? {
                    return Err(DomainError::EmailTaken.into());
                }
                user.email = email;
                user.updated_at = chrono::Utc::now();
                self.ctx.user_repo().update(&user).await?;
            }
        }

        if let Some(password) = request.password {
            validate_password_strength(&password)?;
            let hash = self.password.hash_password(&password)?;
            self.ctx.user_repo().update_password(user.id, &hash).await?;
            info!(user_id = %user.id, "password updated");
        }

        Ok(CurrentUserResponse::from(&user))
    }

    /// Resolve an access token to its active user.
    #[instrument(skip(self, token))]
    pub async fn user_from_token(&self, token: &str) -> ServiceResult<User> {
        let claims = self.ctx.jwt_service().validate_access_token(token)?;
        let user_id = claims.user_id()?;
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::InvalidToken.into())
    }
}

fn validate_username_charset(username: &str) -> ServiceResult<()> {
    if username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        Ok(())
    } else {
        Err(DomainError::InvalidUsername(
            "Username may only contain letters, numbers, and underscores".to_string(),
        )
        .into())
    }
}
