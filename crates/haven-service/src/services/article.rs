//! Article authoring, publishing and listing.
//!
//! The first time an article goes published, a notification is written
//! for every follower of the author inside the same transaction that
//! flips the article.

use std::collections::HashMap;

use haven_core::{Article, DomainError, Notification, Snowflake};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::mappers::ArticleWithAuthor;
use crate::dto::requests::{CreateArticleRequest, UpdateArticleRequest};
use crate::dto::responses::{ArticleListResponse, ArticleResponse, MessageResponse};
use crate::services::context::ServiceContext;
use crate::services::error::{ServiceError, ServiceResult};

pub struct ArticleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ArticleService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, request), fields(author = %author_id))]
    pub async fn create(
        &self,
        author_id: Snowflake,
        request: CreateArticleRequest,
    ) -> ServiceResult<ArticleResponse> {
        request.validate()?;

        let mut article = Article::new(
            self.ctx.next_id(),
            author_id,
            request.title,
            request.description,
            request.body,
            normalize_tags(request.tags),
        );
        self.ctx.article_repo().create(&article).await?;

        if request.published {
            article.apply_update(None, None, None, Some(true), None);
            let notifications = self.fanout(&article).await;
            self.ctx
                .article_repo()
                .update_with_notifications(&article, &notifications)
                .await?;
            info!(article_id = %article.id, followers = notifications.len(), "article published on create");
        } else {
            info!(article_id = %article.id, "article created");
        }

        self.to_response(article).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, slug: &str) -> ServiceResult<ArticleResponse> {
        let article = self.find_by_slug(slug).await?;
        self.to_response(article).await
    }

    /// Update an article; only the author may do this. The slug never
    /// changes, even when the title does.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        author_id: Snowflake,
        slug: &str,
        request: UpdateArticleRequest,
    ) -> ServiceResult<ArticleResponse> {
        request.validate()?;

        let mut article = self.find_by_slug(slug).await?;
        if !article.is_author(author_id) {
            return Err(DomainError::NotArticleAuthor.into());
        }

        let new_state = request.published.unwrap_or(article.published);
        let first_publish = article.is_first_publish(new_state);

        article.apply_update(
            request.title,
            request.description,
            request.body,
            request.published,
            request.tags.map(normalize_tags),
        );

        if first_publish {
            let notifications = self.fanout(&article).await;
            self.ctx
                .article_repo()
                .update_with_notifications(&article, &notifications)
                .await?;
            info!(article_id = %article.id, followers = notifications.len(), "article published");
        } else {
            self.ctx.article_repo().update(&article).await?;
        }

        self.to_response(article).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, author_id: Snowflake, slug: &str) -> ServiceResult<MessageResponse> {
        let article = self.find_by_slug(slug).await?;
        if !article.is_author(author_id) {
            return Err(DomainError::NotArticleAuthor.into());
        }
        self.ctx.article_repo().delete(article.id).await?;
        info!(article_id = %article.id, "article deleted");
        Ok(MessageResponse::new("Article deleted."))
    }

    /// Published articles, newest first. An empty page is an error, not
    /// an empty list.
    #[instrument(skip(self))]
    pub async fn list_published(
        &self,
        limit: i64,
        offset: i64,
    ) -> ServiceResult<ArticleListResponse> {
        let articles = self.ctx.article_repo().list_published(limit, offset).await?;
        if articles.is_empty() {
            return Err(DomainError::NoArticles.into());
        }
        self.to_list_response(articles).await
    }

    /// The author's own articles, drafts included.
    #[instrument(skip(self))]
    pub async fn list_own(
        &self,
        author_id: Snowflake,
        limit: i64,
        offset: i64,
    ) -> ServiceResult<ArticleListResponse> {
        let articles = self
            .ctx
            .article_repo()
            .list_by_author(author_id, limit, offset)
            .await?;
        if articles.is_empty() {
            return Err(DomainError::NoArticles.into());
        }
        self.to_list_response(articles).await
    }

    /// Build one notification per follower, snapshotting the article
    /// content as it is at publish time. A failed follower lookup
    /// degrades to an empty fanout rather than blocking the publish.
    async fn fanout(&self, article: &Article) -> Vec<Notification> {
        let follower_ids = match self.ctx.profile_repo().follower_ids(article.author_id).await {
            Ok(ids) => ids,
            Err(error) => {
                warn!(article_id = %article.id, %error, "follower lookup failed, skipping fanout");
                Vec::new()
            }
        };
        follower_ids
            .into_iter()
            .map(|owner_id| {
                Notification::new(
                    self.ctx.next_id(),
                    article.id,
                    article.title.clone(),
                    article.body.clone(),
                    owner_id,
                )
            })
            .collect()
    }

    async fn find_by_slug(&self, slug: &str) -> ServiceResult<Article> {
        self.ctx
            .article_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::not_found("Article", slug))
    }

    async fn to_response(&self, article: Article) -> ServiceResult<ArticleResponse> {
        let author = self.username_of(article.author_id).await?;
        Ok(ArticleWithAuthor {
            article: &article,
            author: &author,
        }
        .into())
    }

    pub(crate) async fn to_list_response(
        &self,
        articles: Vec<Article>,
    ) -> ServiceResult<ArticleListResponse> {
        let mut usernames: HashMap<Snowflake, String> = HashMap::new();
        let mut responses = Vec::with_capacity(articles.len());
        for article in &articles {
            if !usernames.contains_key(&article.author_id) {
                let username = self.username_of(article.author_id).await?;
                usernames.insert(article.author_id, username);
            }
            responses.push(
                ArticleWithAuthor {
                    article,
                    author: &usernames[&article.author_id],
                }
                .into(),
            );
        }
        let count = responses.len();
        Ok(ArticleListResponse {
            articles: responses,
            count,
        })
    }

    async fn username_of(&self, user_id: Snowflake) -> ServiceResult<String> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;
        Ok(user.username)
    }
}

/// Trim tags and drop empties and duplicates, preserving order.
fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = Vec::new();
    for tag in tags {
        let tag = tag.trim().to_string();
        if !tag.is_empty() && !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_tags_trims_and_dedupes() {
        let tags = vec![
            " rust ".to_string(),
            "rust".to_string(),
            String::new(),
            "web".to_string(),
        ];
        assert_eq!(normalize_tags(tags), vec!["rust", "web"]);
    }
}
