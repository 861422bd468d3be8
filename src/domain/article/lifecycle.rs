// src/domain/article/lifecycle.rs
use crate::domain::article::value_objects::ArticleStatus;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

/// Workflow status plus the timestamps stamped on first entry into
/// `Submitted` and `Published`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LifecycleState {
    status: ArticleStatus,
    submitted_at: Option<DateTime<Utc>>,
    published_at: Option<DateTime<Utc>>,
}

impl LifecycleState {
    pub fn status(&self) -> ArticleStatus {
        self.status
    }

    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        self.submitted_at
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub from: ArticleStatus,
    pub to: ArticleStatus,
    /// Whether this transition set `submitted_at` or `published_at`.
    pub stamped: bool,
}

pub struct LifecycleGuard;

impl LifecycleGuard {
    /// Every status may follow every other one, including `Published` back to
    /// `Draft`. Restricting the workflow only requires changing this function.
    pub fn is_allowed(_from: ArticleStatus, _to: ArticleStatus) -> bool {
        true
    }

    pub fn transition(
        state: &mut LifecycleState,
        to: ArticleStatus,
        now: DateTime<Utc>,
    ) -> DomainResult<StatusChange> {
        let from = state.status;
        if !Self::is_allowed(from, to) {
            return Err(DomainError::Validation(format!(
                "status cannot move from {from} to {to}"
            )));
        }

        state.status = to;
        let slot = match to {
            ArticleStatus::Submitted => Some(&mut state.submitted_at),
            ArticleStatus::Published => Some(&mut state.published_at),
            _ => None,
        };
        let stamped = match slot {
            Some(stamp) if stamp.is_none() => {
                *stamp = Some(now);
                true
            }
            _ => false,
        };

        Ok(StatusChange { from, to, stamped })
    }
}
