mod get_by_id;
mod list;
mod service;
mod versions;

pub use get_by_id::GetArticleByIdQuery;
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
pub use versions::{GetArticleVersionQuery, GetVersionHistoryQuery};
