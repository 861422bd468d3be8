// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{
        Article, ArticleAbstract, ArticleEvent, ArticleId, ArticleTitle, AuthorName, Keywords,
        NewArticle, TemplateType,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub abstract_text: Option<String>,
    pub content: String,
    pub template: TemplateType,
    pub authors: Vec<String>,
    pub keywords: Vec<String>,
    pub author: String,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    abstract_text: Option<String>,
    content: String,
    template: TemplateType,
    authors: Vec<String>,
    keywords: Vec<String>,
    author: Option<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn abstract_text(mut self, abstract_text: impl Into<String>) -> Self {
        self.abstract_text = Some(abstract_text.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn template(mut self, template: TemplateType) -> Self {
        self.template = template;
        self
    }

    pub fn authors(mut self, authors: Vec<String>) -> Self {
        self.authors = authors;
        self
    }

    pub fn keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            abstract_text: self.abstract_text,
            content: self.content,
            template: self.template,
            authors: self.authors,
            keywords: self.keywords,
            author: self.author.ok_or("author is required")?,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let CreateArticleCommand {
            title,
            abstract_text,
            content,
            template,
            authors,
            keywords,
            author,
        } = command;

        let new_article = NewArticle {
            title: ArticleTitle::new(title)?,
            abstract_text: abstract_text.map(ArticleAbstract::new).transpose()?,
            content,
            template,
            authors,
            keywords: Keywords::new(keywords),
        };
        let author = AuthorName::new(author)?;

        let id = ArticleId::new(self.ids.next_id());
        let now = self.clock.now();
        let article = Article::create(id, new_article, self.next_version_id(), author, now);

        let created = self
            .write_repo
            .insert(article)
            .await
            .map_err(super::service::surface)?;
        Self::record_events(&[ArticleEvent::Created { id, at: now }]);
        Ok(created.into())
    }
}
