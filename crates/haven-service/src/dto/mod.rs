//! Data transfer objects for the application layer.

pub mod mappers;
pub mod requests;
pub mod responses;

pub use mappers::ArticleWithAuthor;
pub use requests::{
    CommentPayload, CommentRequest, CreateArticleRequest, FavoriteRequest, ForgotPasswordRequest,
    LoginRequest, MarkReadRequest, OpinionRequest, RateArticleRequest, RefreshTokenRequest,
    RegisterRequest, ResetPasswordRequest, SearchArticlesRequest, UpdateArticleRequest,
    UpdateCommentRequest, UpdateProfileRequest, UpdateUserRequest,
};
pub use responses::{
    ArticleListResponse, ArticleResponse, AuthResponse, CommentListResponse, CommentResponse,
    CurrentUserResponse, FavoriteResponse, FollowersResponse, HealthResponse, MarkReadResponse,
    MessageResponse, NotificationListResponse, NotificationResponse, OpinionResponse,
    ProfileResponse, RatingResponse,
};
