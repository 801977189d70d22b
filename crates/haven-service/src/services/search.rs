//! Article search over published articles.

use haven_core::traits::ArticleFilter;
use haven_core::DomainError;
use tracing::instrument;

use crate::dto::requests::SearchArticlesRequest;
use crate::dto::responses::ArticleListResponse;
use crate::services::article::ArticleService;
use crate::services::context::ServiceContext;
use crate::services::error::{ServiceError, ServiceResult};

pub struct SearchService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SearchService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Search published articles by title substring, author username
    /// substring, or exact tag. Title and author match case-insensitively;
    /// tags match exactly. No matches is an error, not an empty list.
    #[instrument(skip(self, request))]
    pub async fn search(&self, request: SearchArticlesRequest) -> ServiceResult<ArticleListResponse> {
        let filter = ArticleFilter {
            title: request.title.as_deref().and_then(clean_term),
            author: request.author.as_deref().and_then(clean_term),
            tag: request.tag.as_deref().and_then(clean_term),
        };
        if filter.is_empty() {
            return Err(ServiceError::validation(
                "Provide at least one of title, author, or tag",
            ));
        }

        let articles = self.ctx.article_repo().search(&filter).await?;
        if articles.is_empty() {
            return Err(DomainError::NoResultsMatch.into());
        }

        ArticleService::new(self.ctx).to_list_response(articles).await
    }
}

/// Collapse runs of whitespace to single spaces; empty terms become None.
fn clean_term(term: &str) -> Option<String> {
    let cleaned = term.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_term_collapses_whitespace() {
        assert_eq!(clean_term("  rust   lang "), Some("rust lang".to_string()));
        assert_eq!(clean_term("   "), None);
    }
}
