use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleSummaryDto,
        error::{ApplicationError, ApplicationResult},
        validation::{DEFAULT_LIST_LIMIT, check_list_limit},
    },
    domain::article::{ArticleListFilter, ArticleStatus},
};

pub struct ListArticlesQuery {
    pub status: Option<ArticleStatus>,
    pub skip: u32,
    pub limit: u32,
}

impl Default for ListArticlesQuery {
    fn default() -> Self {
        Self {
            status: None,
            skip: 0,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl ArticleQueryService {
    /// Summaries, most recently updated first. An empty page is not an error.
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        let limit = check_list_limit(query.limit)?;
        let skip = usize::try_from(query.skip)
            .map_err(|_| ApplicationError::validation("skip out of range"))?;

        let records = self
            .read_repo
            .list_page(ArticleListFilter::with_status(query.status), skip, limit)
            .await?;

        Ok(records.iter().map(ArticleSummaryDto::from).collect())
    }
}
