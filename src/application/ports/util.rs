// src/application/ports/util.rs
use uuid::Uuid;

/// Source of fresh identifiers for articles and versions.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> Uuid;
}
