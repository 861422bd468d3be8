// src/application/validation.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::ArticleId;

pub const DEFAULT_LIST_LIMIT: u32 = 100;
pub const MAX_LIST_LIMIT: u32 = 1000;

pub(crate) fn parse_article_id(raw: &str) -> ApplicationResult<ArticleId> {
    ArticleId::parse(raw).map_err(|_| ApplicationError::not_found(format!("article {raw} not found")))
}

/// Numbers below 1 or beyond `u32` can never exist in a chain.
pub(crate) fn parse_version_number(raw: i64) -> ApplicationResult<u32> {
    u32::try_from(raw)
        .ok()
        .filter(|number| *number >= 1)
        .ok_or_else(|| ApplicationError::not_found(format!("version {raw} not found")))
}

pub(crate) fn check_list_limit(limit: u32) -> ApplicationResult<usize> {
    if limit == 0 || limit > MAX_LIST_LIMIT {
        return Err(ApplicationError::validation(format!(
            "limit must be between 1 and {MAX_LIST_LIMIT}"
        )));
    }
    usize::try_from(limit).map_err(|_| ApplicationError::validation("limit out of range"))
}
