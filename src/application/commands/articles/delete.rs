// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::application::{error::ApplicationResult, validation::parse_article_id};

pub struct DeleteArticleCommand {
    pub id: String,
}

impl ArticleCommandService {
    /// Removes the article and its whole history. Unknown ids yield `false`.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<bool> {
        let Ok(id) = parse_article_id(&command.id) else {
            return Ok(false);
        };

        let existed = self.write_repo.delete(id).await?;
        if existed {
            tracing::info!(article_id = %id, "article deleted");
        }
        Ok(existed)
    }
}
