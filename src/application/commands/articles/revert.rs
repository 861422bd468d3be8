// src/application/commands/articles/revert.rs
use std::sync::Arc;

use super::{ArticleCommandService, service::surface};
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        validation::{parse_article_id, parse_version_number},
    },
    domain::article::{Article, AuthorName},
};

pub struct RevertArticleCommand {
    pub id: String,
    pub version_number: i64,
    pub author: String,
}

impl ArticleCommandService {
    /// Copy an earlier version forward as the newest one.
    pub async fn revert_article(
        &self,
        command: RevertArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = parse_article_id(&command.id)?;
        let target = parse_version_number(command.version_number)?;
        let author = AuthorName::new(command.author)?;
        let version_id = self.next_version_id();
        let clock = Arc::clone(&self.clock);

        let mutated = self
            .write_repo
            .update_with(
                id,
                Box::new(move |article: &mut Article| {
                    article.revert_to(target, author, version_id, clock.now())
                }),
            )
            .await
            .map_err(surface)?
            .ok_or_else(|| ApplicationError::not_found(format!("article {id} not found")))?;

        Self::record_events(&mutated.events);
        Ok(mutated.article.into())
    }
}
