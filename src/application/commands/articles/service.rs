// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{time::Clock, util::IdGenerator},
    },
    domain::{
        article::{ArticleEvent, ArticleWriteRepository, VersionId},
        errors::DomainError,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) ids: Arc<dyn IdGenerator>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            write_repo,
            clock,
            ids,
        }
    }

    pub(super) fn next_version_id(&self) -> VersionId {
        VersionId::new(self.ids.next_id())
    }

    pub(super) fn record_events(events: &[ArticleEvent]) {
        for event in events {
            match event {
                ArticleEvent::Created { id, .. } => {
                    tracing::info!(article_id = %id, "article created");
                }
                ArticleEvent::VersionAppended { id, version, .. } => {
                    tracing::info!(article_id = %id, version, "version appended");
                }
                ArticleEvent::Reverted {
                    id,
                    target,
                    version,
                    ..
                } => {
                    tracing::info!(article_id = %id, target, version, "article reverted");
                }
                ArticleEvent::StatusChanged {
                    id,
                    from,
                    to,
                    stamped,
                    ..
                } => {
                    tracing::info!(article_id = %id, %from, %to, stamped, "status changed");
                }
            }
        }
    }
}

/// Invariant failures mean a bug in the engine, so they are logged loudly on
/// their way out.
pub(super) fn surface(err: DomainError) -> ApplicationError {
    if let DomainError::InvariantViolation(detail) = &err {
        tracing::error!(%detail, "article invariant violated; mutation discarded");
    }
    ApplicationError::from(err)
}
