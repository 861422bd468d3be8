pub mod articles;

pub use articles::{ArticleDto, ArticleSummaryDto, VersionDto};
