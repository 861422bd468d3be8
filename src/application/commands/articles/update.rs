// src/application/commands/articles/update.rs
use std::sync::Arc;

use super::{ArticleCommandService, service::surface};
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        validation::parse_article_id,
    },
    domain::article::{
        Article, ArticleAbstract, ArticlePatch, ArticleStatus, ArticleTitle, AuthorName, Keywords,
        TemplateType,
    },
};

#[derive(Default)]
pub struct UpdateArticleCommand {
    pub id: String,
    pub title: Option<String>,
    pub abstract_text: Option<String>,
    pub content: Option<String>,
    pub status: Option<ArticleStatus>,
    pub template: Option<TemplateType>,
    pub authors: Option<Vec<String>>,
    pub keywords: Option<Vec<String>>,
    pub references: Option<Vec<String>>,
    pub changes_summary: Option<String>,
    pub author: String,
}

impl UpdateArticleCommand {
    fn into_patch(self) -> ApplicationResult<(ArticlePatch, AuthorName)> {
        let mut patch = ArticlePatch::new();
        if let Some(title) = self.title {
            patch = patch.with_title(ArticleTitle::new(title)?);
        }
        if let Some(abstract_text) = self.abstract_text {
            patch = patch.with_abstract(ArticleAbstract::new(abstract_text)?);
        }
        if let Some(content) = self.content {
            patch = patch.with_content(content);
        }
        if let Some(status) = self.status {
            patch = patch.with_status(status);
        }
        if let Some(template) = self.template {
            patch = patch.with_template(template);
        }
        if let Some(authors) = self.authors {
            patch = patch.with_authors(authors);
        }
        if let Some(keywords) = self.keywords {
            patch = patch.with_keywords(Keywords::new(keywords));
        }
        if let Some(references) = self.references {
            patch = patch.with_references(references);
        }
        if let Some(summary) = self.changes_summary {
            patch = patch.with_changes_summary(summary);
        }
        Ok((patch, AuthorName::new(self.author)?))
    }
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = parse_article_id(&command.id)?;
        let (patch, author) = command.into_patch()?;
        let version_id = self.next_version_id();
        let clock = Arc::clone(&self.clock);

        let mutated = self
            .write_repo
            .update_with(
                id,
                Box::new(move |article: &mut Article| {
                    article.apply_patch(patch, author, version_id, clock.now())
                }),
            )
            .await
            .map_err(surface)?
            .ok_or_else(|| ApplicationError::not_found(format!("article {id} not found")))?;

        Self::record_events(&mutated.events);
        Ok(mutated.article.into())
    }
}
