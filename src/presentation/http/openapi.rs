// src/presentation/http/openapi.rs
use axum::Router;
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_JSON_PATH: &str = "/openapi.json";
const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";
const DEFAULT_PUBLIC_URL: &str = "http://localhost:8000";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfoResponse {
    pub name: String,
    pub description: String,
    pub version: String,
    pub modules: Vec<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::get_version_history,
        crate::presentation::http::controllers::articles::get_article_version,
        crate::presentation::http::controllers::articles::revert_article,
        super::routes::health,
        super::routes::service_info
    ),
    components(
        schemas(
            StatusResponse,
            ServiceInfoResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleSummaryDto,
            crate::application::dto::VersionDto,
            crate::domain::article::ArticleStatus,
            crate::domain::article::TemplateType
        )
    ),
    tags(
        (name = "Articles", description = "Article lifecycle endpoints"),
        (name = "Versions", description = "Version history and revert"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&PublicServers),
    info(
        title = "Manuscript API",
        description = "Article lifecycle and version control",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Lists `PUBLIC_API_URLS` (comma separated) as servers, falling back to the
/// local default.
struct PublicServers;

impl Modify for PublicServers {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(|segment| segment.trim().trim_end_matches('/'))
                    .filter(|segment| !segment.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        urls.dedup();

        if urls.is_empty() {
            urls.push(DEFAULT_PUBLIC_URL.to_string());
        }

        openapi.servers = Some(urls.into_iter().map(Server::new).collect());
    }
}

/// Swagger UI under `/docs`, Redoc under `/redoc` and the raw document at
/// `/openapi.json`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new().merge(swagger).merge(redoc)
}

pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
