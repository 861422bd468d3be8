pub mod entity;
pub mod events;
pub mod lifecycle;
pub mod repository;
pub mod specifications;
pub mod value_objects;
pub mod version;

pub use entity::{Article, ArticlePatch, NewArticle};
pub use events::ArticleEvent;
pub use lifecycle::{LifecycleGuard, LifecycleState, StatusChange};
pub use repository::{ArticleMutation, ArticleReadRepository, ArticleWriteRepository, MutatedArticle};
pub use specifications::{ArticleListFilter, ArticleSpecification};
pub use value_objects::{
    ArticleAbstract, ArticleId, ArticleStatus, ArticleTitle, AuthorName, Keywords, TemplateType,
    VersionId,
};
pub use version::{Version, VersionChain};
