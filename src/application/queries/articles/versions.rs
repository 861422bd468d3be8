use super::ArticleQueryService;
use crate::application::{
    dto::VersionDto,
    error::{ApplicationError, ApplicationResult},
    validation::parse_version_number,
};

pub struct GetArticleVersionQuery {
    pub article_id: String,
    pub version_number: i64,
}

pub struct GetVersionHistoryQuery {
    pub article_id: String,
}

impl ArticleQueryService {
    pub async fn get_version(
        &self,
        query: GetArticleVersionQuery,
    ) -> ApplicationResult<VersionDto> {
        let article = self.load(&query.article_id).await?;
        let number = parse_version_number(query.version_number)?;
        article
            .version(number)
            .map(VersionDto::from)
            .ok_or_else(|| {
                ApplicationError::not_found(format!(
                    "version {number} of article {} not found",
                    article.id
                ))
            })
    }

    /// Full chain, oldest first.
    pub async fn get_history(
        &self,
        query: GetVersionHistoryQuery,
    ) -> ApplicationResult<Vec<VersionDto>> {
        let article = self.load(&query.article_id).await?;
        Ok(article.versions().iter().map(VersionDto::from).collect())
    }
}
