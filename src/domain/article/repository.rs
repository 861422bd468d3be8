use crate::domain::article::entity::Article;
use crate::domain::article::events::ArticleEvent;
use crate::domain::article::specifications::ArticleListFilter;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Change applied to a stored article while the store holds it exclusively.
/// Returning an error discards the change.
pub type ArticleMutation =
    Box<dyn FnOnce(&mut Article) -> DomainResult<Vec<ArticleEvent>> + Send>;

#[derive(Debug, Clone)]
pub struct MutatedArticle {
    pub article: Article,
    pub events: Vec<ArticleEvent>,
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: Article) -> DomainResult<Article>;
    /// Read, modify and write back one article as a single step. `Ok(None)`
    /// means no article has that id.
    async fn update_with(
        &self,
        id: ArticleId,
        mutation: ArticleMutation,
    ) -> DomainResult<Option<MutatedArticle>>;
    /// Hard delete. Returns whether the article existed.
    async fn delete(&self, id: ArticleId) -> DomainResult<bool>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Matching articles, most recently updated first, after skipping `skip`
    /// and keeping at most `limit`.
    async fn list_page(
        &self,
        filter: ArticleListFilter,
        skip: usize,
        limit: usize,
    ) -> DomainResult<Vec<Article>>;
}
