use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        validation::parse_article_id,
    },
    domain::article::{Article, ArticleReadRepository},
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self { read_repo }
    }

    pub(super) async fn load(&self, raw_id: &str) -> ApplicationResult<Article> {
        let id = parse_article_id(raw_id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article {id} not found")))
    }
}
