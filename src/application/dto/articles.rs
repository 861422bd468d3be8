use crate::domain::article::{Article, ArticleStatus, TemplateType, Version};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VersionDto {
    pub version_id: String,
    pub version_number: u32,
    pub content: String,
    pub author: String,
    pub changes_summary: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Version> for VersionDto {
    fn from(version: &Version) -> Self {
        Self {
            version_id: version.id().into(),
            version_number: version.number(),
            content: version.content().to_owned(),
            author: version.author().as_str().to_owned(),
            changes_summary: version.changes_summary().to_owned(),
            created_at: version.created_at(),
        }
    }
}

/// Full article including its version history.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub article_id: String,
    pub title: String,
    #[serde(rename = "abstract", default)]
    pub abstract_text: Option<String>,
    pub content: String,
    pub status: ArticleStatus,
    pub template: TemplateType,
    pub authors: Vec<String>,
    pub keywords: Vec<String>,
    pub references: Vec<String>,
    pub current_version: u32,
    pub versions: Vec<VersionDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        let versions = article.versions().iter().map(VersionDto::from).collect();
        Self {
            article_id: article.id.into(),
            content: article.content().to_owned(),
            status: article.status(),
            current_version: article.current_version(),
            created_at: article.created_at(),
            updated_at: article.updated_at(),
            submitted_at: article.submitted_at(),
            published_at: article.published_at(),
            versions,
            title: article.title.into_inner(),
            abstract_text: article.abstract_text.map(|a| a.into_inner()),
            template: article.template,
            authors: article.authors,
            keywords: article.keywords.into_inner(),
            references: article.references,
        }
    }
}

/// Listing projection without content or history.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub article_id: String,
    pub title: String,
    pub status: ArticleStatus,
    pub current_version: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Article> for ArticleSummaryDto {
    fn from(article: &Article) -> Self {
        Self {
            article_id: article.id.into(),
            title: article.title.as_str().to_owned(),
            status: article.status(),
            current_version: article.current_version(),
            created_at: article.created_at(),
            updated_at: article.updated_at(),
        }
    }
}
