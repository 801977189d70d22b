//! Entity to response-DTO conversions.

use haven_core::{Article, Comment, Notification, Profile, User};

use super::responses::{
    ArticleResponse, CommentResponse, CurrentUserResponse, NotificationResponse, ProfileResponse,
};

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            verified: user.verified,
            created_at: user.created_at,
        }
    }
}

impl From<&Profile> for ProfileResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            username: profile.username.clone(),
            bio: profile.bio.clone(),
            image: profile.image.clone(),
            followers: profile.followers,
            following: profile.following,
        }
    }
}

/// Article responses carry the author's username, which lives
/// outside the article entity.
pub struct ArticleWithAuthor<'a> {
    pub article: &'a Article,
    pub author: &'a str,
}

impl From<ArticleWithAuthor<'_>> for ArticleResponse {
    fn from(value: ArticleWithAuthor<'_>) -> Self {
        let article = value.article;
        Self {
            id: article.id,
            slug: article.slug.as_str().to_string(),
            title: article.title.clone(),
            description: article.description.clone(),
            body: article.body.clone(),
            author: value.author.to_string(),
            published: article.published,
            tags: article.tags.clone(),
            created_at: article.created_at,
            updated_at: article.updated_at,
            first_published_at: article.first_published_at,
        }
    }
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            article_id: comment.article_id,
            author: comment.author_id,
            body: comment.body.clone(),
            parent_id: comment.parent_id,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

impl From<&Notification> for NotificationResponse {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id,
            article_id: notification.article_id,
            title: notification.title.clone(),
            body: notification.body.clone(),
            read_status: notification.read_status,
            created_at: notification.created_at,
        }
    }
}
