// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod revert;
mod service;
mod update;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use revert::RevertArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
