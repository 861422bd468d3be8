// src/infrastructure/repositories/in_memory_article.rs
use crate::domain::article::{
    Article, ArticleId, ArticleListFilter, ArticleMutation, ArticleReadRepository,
    ArticleSpecification, ArticleWriteRepository, MutatedArticle, entity::recently_updated_first,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local article store. One lock covers the whole map: writers hold it
/// for the full read-modify-write and readers only ever see committed
/// articles.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    articles: RwLock<HashMap<ArticleId, Article>>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.articles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.articles.read().await.is_empty()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepository {
    async fn insert(&self, article: Article) -> DomainResult<Article> {
        article.check_invariants()?;

        let mut articles = self.articles.write().await;
        if articles.contains_key(&article.id) {
            return Err(DomainError::InvariantViolation(format!(
                "article id {} allocated twice",
                article.id
            )));
        }
        articles.insert(article.id, article.clone());
        Ok(article)
    }

    async fn update_with(
        &self,
        id: ArticleId,
        mutation: ArticleMutation,
    ) -> DomainResult<Option<MutatedArticle>> {
        let mut articles = self.articles.write().await;
        let Some(stored) = articles.get_mut(&id) else {
            return Ok(None);
        };

        // Work on a copy so a failed mutation leaves the stored article as it was.
        let mut working = stored.clone();
        let events = mutation(&mut working)?;
        working.check_invariants()?;

        *stored = working.clone();
        Ok(Some(MutatedArticle {
            article: working,
            events,
        }))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<bool> {
        Ok(self.articles.write().await.remove(&id).is_some())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.articles.read().await.get(&id).cloned())
    }

    async fn list_page(
        &self,
        filter: ArticleListFilter,
        skip: usize,
        limit: usize,
    ) -> DomainResult<Vec<Article>> {
        let articles = self.articles.read().await;
        let mut matching: Vec<&Article> = articles
            .values()
            .filter(|article| filter.is_satisfied_by(article))
            .collect();
        matching.sort_by(|a, b| recently_updated_first(a, b));

        Ok(matching
            .into_iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }
}
