use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleStatus;

pub trait ArticleSpecification {
    fn is_satisfied_by(&self, article: &Article) -> bool;
}

pub struct HasStatusSpec(pub ArticleStatus);

impl ArticleSpecification for HasStatusSpec {
    fn is_satisfied_by(&self, article: &Article) -> bool {
        article.status() == self.0
    }
}

/// Predicate applied before ordering and pagination when listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArticleListFilter {
    pub status: Option<ArticleStatus>,
}

impl ArticleListFilter {
    pub fn with_status(status: Option<ArticleStatus>) -> Self {
        Self { status }
    }
}

impl ArticleSpecification for ArticleListFilter {
    fn is_satisfied_by(&self, article: &Article) -> bool {
        self.status
            .is_none_or(|status| HasStatusSpec(status).is_satisfied_by(article))
    }
}
