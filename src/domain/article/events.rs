use crate::domain::article::value_objects::{ArticleId, ArticleStatus};
use chrono::{DateTime, Utc};

/// What a single mutation did to an article. Emitted by the aggregate and
/// consumed by the application layer for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleEvent {
    Created {
        id: ArticleId,
        at: DateTime<Utc>,
    },
    VersionAppended {
        id: ArticleId,
        version: u32,
        at: DateTime<Utc>,
    },
    Reverted {
        id: ArticleId,
        target: u32,
        version: u32,
        at: DateTime<Utc>,
    },
    StatusChanged {
        id: ArticleId,
        from: ArticleStatus,
        to: ArticleStatus,
        stamped: bool,
        at: DateTime<Utc>,
    },
}
