//! Article handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use haven_service::dto::{
    ArticleListResponse, ArticleResponse, CreateArticleRequest, MessageResponse,
    SearchArticlesRequest, UpdateArticleRequest,
};
use haven_service::{ArticleService, SearchService};

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create an article
///
/// POST /articles
pub async fn create_article(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateArticleRequest>,
) -> ApiResult<Created<Json<ArticleResponse>>> {
    let service = ArticleService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List published articles, newest first
///
/// GET /articles
pub async fn list_articles(
    State(state): State<AppState>,
    pagination: Pagination,
) -> ApiResult<Json<ArticleListResponse>> {
    let service = ArticleService::new(state.service_context());
    let response = service
        .list_published(pagination.limit, pagination.offset)
        .await?;
    Ok(Json(response))
}

/// List the authenticated author's articles, drafts included
///
/// GET /articles/mine
pub async fn list_own_articles(
    State(state): State<AppState>,
    auth: AuthUser,
    pagination: Pagination,
) -> ApiResult<Json<ArticleListResponse>> {
    let service = ArticleService::new(state.service_context());
    let response = service
        .list_own(auth.user_id, pagination.limit, pagination.offset)
        .await?;
    Ok(Json(response))
}

/// Search published articles by title, author, or tag
///
/// GET /articles/search
pub async fn search_articles(
    State(state): State<AppState>,
    Query(request): Query<SearchArticlesRequest>,
) -> ApiResult<Json<ArticleListResponse>> {
    let service = SearchService::new(state.service_context());
    let response = service.search(request).await?;
    Ok(Json(response))
}

/// Fetch an article by slug
///
/// GET /articles/:slug
pub async fn get_article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<ArticleResponse>> {
    let service = ArticleService::new(state.service_context());
    let response = service.get(&slug).await?;
    Ok(Json(response))
}

/// Update an article; publishing it for the first time notifies the
/// author's followers
///
/// PATCH /articles/:slug
pub async fn update_article(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateArticleRequest>,
) -> ApiResult<Json<ArticleResponse>> {
    let service = ArticleService::new(state.service_context());
    let response = service.update(auth.user_id, &slug, request).await?;
    Ok(Json(response))
}

/// Delete an article
///
/// DELETE /articles/:slug
pub async fn delete_article(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let service = ArticleService::new(state.service_context());
    let response = service.delete(auth.user_id, &slug).await?;
    Ok(Json(response))
}
