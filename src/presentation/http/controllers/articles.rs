// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, RevertArticleCommand, UpdateArticleCommand,
    },
    dto::{ArticleDto, ArticleSummaryDto, VersionDto},
    queries::articles::{
        GetArticleByIdQuery, GetArticleVersionQuery, GetVersionHistoryQuery, ListArticlesQuery,
    },
};
use crate::domain::article::{ArticleStatus, TemplateType};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

fn default_limit() -> u32 {
    crate::application::validation::DEFAULT_LIST_LIMIT
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Only return articles with this status.
    #[serde(default)]
    pub status: Option<ArticleStatus>,
    #[serde(default)]
    pub skip: u32,
    /// Between 1 and 1000.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AuthorParams {
    /// Recorded on any version the request creates.
    #[serde(default)]
    pub author: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    #[serde(rename = "abstract", default)]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub template: TemplateType,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub content: Option<String>,
    pub status: Option<ArticleStatus>,
    pub template: Option<TemplateType>,
    pub authors: Option<Vec<String>>,
    pub keywords: Option<Vec<String>>,
    pub references: Option<Vec<String>>,
    pub changes_summary: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/articles",
    params(AuthorParams),
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created with its first version.", body = ArticleDto),
        (status = 400, description = "Invalid title or abstract.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Query(params): Query<AuthorParams>,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        abstract_text: payload.abstract_text,
        content: payload.content,
        template: payload.template,
        authors: payload.authors,
        keywords: payload.keywords,
        author: state.author_or_default(params.author),
    };

    let article = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Articles, most recently updated first.", body = [ArticleSummaryDto]),
        (status = 400, description = "Limit out of range.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Vec<ArticleSummaryDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            status: params.status,
            skip: params.skip,
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article with its full history.", body = ArticleDto),
        (status = 404, description = "Article not found.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/articles/{id}",
    params(("id" = String, Path, description = "Article id"), AuthorParams),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Updated article. Changed content adds a version.", body = ArticleDto),
        (status = 400, description = "Invalid field value.", body = ErrorResponse),
        (status = 404, description = "Article not found.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Query(params): Query<AuthorParams>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        abstract_text: payload.abstract_text,
        content: payload.content,
        status: payload.status,
        template: payload.template,
        authors: payload.authors,
        keywords: payload.keywords,
        references: payload.references,
        changes_summary: payload.changes_summary,
        author: state.author_or_default(params.author),
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 204, description = "Article and its history removed."),
        (status = 404, description = "Article not found.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    let existed = state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    if existed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(HttpError::not_found("article not found"))
    }
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}/versions",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "Every version, oldest first.", body = [VersionDto]),
        (status = 404, description = "Article not found.", body = ErrorResponse)
    ),
    tag = "Versions"
)]
pub async fn get_version_history(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<Vec<VersionDto>>> {
    state
        .services
        .article_queries
        .get_history(GetVersionHistoryQuery { article_id: id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}/versions/{version_number}",
    params(
        ("id" = String, Path, description = "Article id"),
        ("version_number" = i64, Path, description = "Version number, starting at 1")
    ),
    responses(
        (status = 200, description = "The requested version.", body = VersionDto),
        (status = 404, description = "Article or version not found.", body = ErrorResponse)
    ),
    tag = "Versions"
)]
pub async fn get_article_version(
    Extension(state): Extension<HttpState>,
    Path((id, version_number)): Path<(String, i64)>,
) -> HttpResult<Json<VersionDto>> {
    state
        .services
        .article_queries
        .get_version(GetArticleVersionQuery {
            article_id: id,
            version_number,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/articles/{id}/revert/{version_number}",
    params(
        ("id" = String, Path, description = "Article id"),
        ("version_number" = i64, Path, description = "Version whose content is restored"),
        AuthorParams
    ),
    responses(
        (status = 200, description = "Article with the restored content as its newest version.", body = ArticleDto),
        (status = 404, description = "Article or version not found.", body = ErrorResponse)
    ),
    tag = "Versions"
)]
pub async fn revert_article(
    Extension(state): Extension<HttpState>,
    Path((id, version_number)): Path<(String, i64)>,
    Query(params): Query<AuthorParams>,
) -> HttpResult<Json<ArticleDto>> {
    let command = RevertArticleCommand {
        id,
        version_number,
        author: state.author_or_default(params.author),
    };

    state
        .services
        .article_commands
        .revert_article(command)
        .await
        .into_http()
        .map(Json)
}
