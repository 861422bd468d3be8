// src/domain/article/entity.rs
use crate::domain::article::events::ArticleEvent;
use crate::domain::article::lifecycle::{LifecycleGuard, LifecycleState};
use crate::domain::article::value_objects::{
    ArticleAbstract, ArticleId, ArticleStatus, ArticleTitle, AuthorName, Keywords, TemplateType,
    VersionId,
};
use crate::domain::article::version::{self, Version, VersionChain, VersionDraft};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Article aggregate. `content` and `current_version` are a projection of the
/// newest entry in `versions` and are only written by `append_version`.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub abstract_text: Option<ArticleAbstract>,
    pub authors: Vec<String>,
    pub keywords: Keywords,
    pub references: Vec<String>,
    pub template: TemplateType,
    lifecycle: LifecycleState,
    content: String,
    current_version: u32,
    versions: VersionChain,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub abstract_text: Option<ArticleAbstract>,
    pub content: String,
    pub template: TemplateType,
    pub authors: Vec<String>,
    pub keywords: Keywords,
}

impl Article {
    /// Build a draft article together with its first version.
    pub fn create(
        id: ArticleId,
        new: NewArticle,
        first_version: VersionId,
        author: AuthorName,
        now: DateTime<Utc>,
    ) -> Self {
        let NewArticle {
            title,
            abstract_text,
            content,
            template,
            authors,
            keywords,
        } = new;

        let authors = if authors.is_empty() {
            vec![author.as_str().to_owned()]
        } else {
            authors
        };

        let versions = VersionChain::start(VersionDraft {
            id: first_version,
            content: content.clone(),
            author,
            changes_summary: VersionChain::INITIAL_SUMMARY.into(),
            created_at: now,
        });

        Self {
            id,
            title,
            abstract_text,
            authors,
            keywords,
            references: Vec::new(),
            template,
            lifecycle: LifecycleState::default(),
            content,
            current_version: 1,
            versions,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn status(&self) -> ArticleStatus {
        self.lifecycle.status()
    }

    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        self.lifecycle.submitted_at()
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.lifecycle.published_at()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn current_version(&self) -> u32 {
        self.current_version
    }

    pub fn versions(&self) -> &[Version] {
        self.versions.history()
    }

    pub fn version(&self, number: u32) -> Option<&Version> {
        self.versions.get(number)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Merge `patch` into the article. A version is appended only when the
    /// patch carries content that differs from the current content.
    pub fn apply_patch(
        &mut self,
        patch: ArticlePatch,
        author: AuthorName,
        version_id: VersionId,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<ArticleEvent>> {
        let ArticlePatch {
            title,
            abstract_text,
            content,
            status,
            template,
            authors,
            keywords,
            references,
            changes_summary,
        } = patch;
        let mut events = Vec::new();

        if let Some(status) = status {
            let change = LifecycleGuard::transition(&mut self.lifecycle, status, now)?;
            if change.from != change.to || change.stamped {
                events.push(ArticleEvent::StatusChanged {
                    id: self.id,
                    from: change.from,
                    to: change.to,
                    stamped: change.stamped,
                    at: now,
                });
            }
        }

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(abstract_text) = abstract_text {
            self.abstract_text = Some(abstract_text);
        }
        if let Some(template) = template {
            self.template = template;
        }
        if let Some(authors) = authors {
            self.authors = authors;
        }
        if let Some(keywords) = keywords {
            self.keywords = keywords;
        }
        if let Some(references) = references {
            self.references = references;
        }

        if let Some(content) = content.filter(|c| *c != self.content) {
            let changes_summary = changes_summary
                .unwrap_or_else(|| version::update_summary(self.current_version + 1));
            let number = self.append_version(VersionDraft {
                id: version_id,
                content,
                author,
                changes_summary,
                created_at: now,
            });
            events.push(ArticleEvent::VersionAppended {
                id: self.id,
                version: number,
                at: now,
            });
        }

        self.updated_at = now;
        Ok(events)
    }

    /// Restore the content of version `target` by appending a new version.
    /// History is never truncated.
    pub fn revert_to(
        &mut self,
        target: u32,
        author: AuthorName,
        version_id: VersionId,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<ArticleEvent>> {
        let content = self
            .versions
            .get(target)
            .map(|v| v.content().to_owned())
            .ok_or_else(|| {
                DomainError::NotFound(format!("version {target} of article {} not found", self.id))
            })?;

        let number = self.append_version(VersionDraft {
            id: version_id,
            content,
            author,
            changes_summary: version::revert_summary(target),
            created_at: now,
        });
        self.updated_at = now;

        Ok(vec![ArticleEvent::Reverted {
            id: self.id,
            target,
            version: number,
            at: now,
        }])
    }

    /// Verify the chain and its projection agree. A failure here is a bug.
    pub fn check_invariants(&self) -> DomainResult<()> {
        self.versions.verify()?;
        let latest = self.versions.latest().ok_or_else(|| {
            DomainError::InvariantViolation(format!("article {} has no versions", self.id))
        })?;
        if self.current_version != latest.number() {
            return Err(DomainError::InvariantViolation(format!(
                "article {} points at version {} but the chain ends at {}",
                self.id,
                self.current_version,
                latest.number()
            )));
        }
        if self.content != latest.content() {
            return Err(DomainError::InvariantViolation(format!(
                "article {} content differs from version {}",
                self.id,
                latest.number()
            )));
        }
        Ok(())
    }

    fn append_version(&mut self, draft: VersionDraft) -> u32 {
        let appended = self.versions.append(draft);
        let number = appended.number();
        self.content = appended.content().to_owned();
        self.current_version = number;
        number
    }
}

/// Listing order: most recently touched first. Ties fall back to creation
/// time and then id so pages are stable.
pub fn recently_updated_first(a: &Article, b: &Article) -> Ordering {
    b.updated_at
        .cmp(&a.updated_at)
        .then_with(|| b.created_at.cmp(&a.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

/// Field-level merge patch. Absent fields leave the article untouched.
#[derive(Debug, Clone, Default)]
pub struct ArticlePatch {
    pub title: Option<ArticleTitle>,
    pub abstract_text: Option<ArticleAbstract>,
    pub content: Option<String>,
    pub status: Option<ArticleStatus>,
    pub template: Option<TemplateType>,
    pub authors: Option<Vec<String>>,
    pub keywords: Option<Keywords>,
    pub references: Option<Vec<String>>,
    pub changes_summary: Option<String>,
}

impl ArticlePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_abstract(mut self, abstract_text: ArticleAbstract) -> Self {
        self.abstract_text = Some(abstract_text);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_template(mut self, template: TemplateType) -> Self {
        self.template = Some(template);
        self
    }

    pub fn with_authors(mut self, authors: Vec<String>) -> Self {
        self.authors = Some(authors);
        self
    }

    pub fn with_keywords(mut self, keywords: Keywords) -> Self {
        self.keywords = Some(keywords);
        self
    }

    pub fn with_references(mut self, references: Vec<String>) -> Self {
        self.references = Some(references);
        self
    }

    pub fn with_changes_summary(mut self, summary: impl Into<String>) -> Self {
        self.changes_summary = Some(summary.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;
    use uuid::Uuid;

    fn vid() -> VersionId {
        VersionId::new(Uuid::new_v4())
    }

    fn author() -> AuthorName {
        AuthorName::new("ada").unwrap()
    }

    fn sample_article(content: &str, now: DateTime<Utc>) -> Article {
        Article::create(
            ArticleId::new(Uuid::new_v4()),
            NewArticle {
                title: ArticleTitle::new("On Engines").unwrap(),
                abstract_text: None,
                content: content.into(),
                template: TemplateType::default(),
                authors: Vec::new(),
                keywords: Keywords::default(),
            },
            vid(),
            author(),
            now,
        )
    }

    #[test]
    fn create_starts_a_draft_at_version_one() {
        let now = Utc::now();
        let article = sample_article("", now);
        assert_eq!(article.status(), ArticleStatus::Draft);
        assert_eq!(article.current_version(), 1);
        assert_eq!(article.versions().len(), 1);
        assert_eq!(article.versions()[0].changes_summary(), "Initial version");
        assert_eq!(article.authors, vec!["ada".to_string()]);
        assert_eq!(article.template, TemplateType::Generic);
        assert_eq!(article.created_at(), now);
        article.check_invariants().unwrap();
    }

    #[test]
    fn changed_content_appends_a_version() {
        let now = Utc::now();
        let mut article = sample_article("", now);
        let later = now + Duration::seconds(1);
        let events = article
            .apply_patch(ArticlePatch::new().with_content("A"), author(), vid(), later)
            .unwrap();

        assert_eq!(article.current_version(), 2);
        assert_eq!(article.content(), "A");
        assert_eq!(article.version(2).unwrap().changes_summary(), "Version 2 update");
        assert_eq!(article.updated_at(), later);
        assert!(matches!(events.as_slice(), [ArticleEvent::VersionAppended { version: 2, .. }]));
        article.check_invariants().unwrap();
    }

    #[test]
    fn identical_content_only_refreshes_updated_at() {
        let now = Utc::now();
        let mut article = sample_article("A", now);
        let later = now + Duration::seconds(3);
        let events = article
            .apply_patch(ArticlePatch::new().with_content("A"), author(), vid(), later)
            .unwrap();

        assert!(events.is_empty());
        assert_eq!(article.current_version(), 1);
        assert_eq!(article.updated_at(), later);
    }

    #[test]
    fn patch_only_overwrites_present_fields() {
        let now = Utc::now();
        let mut article = sample_article("body", now);
        article
            .apply_patch(
                ArticlePatch::new()
                    .with_references(vec!["[1] Knuth".into()])
                    .with_template(TemplateType::Acm),
                author(),
                vid(),
                now,
            )
            .unwrap();

        assert_eq!(article.title.as_str(), "On Engines");
        assert_eq!(article.references, vec!["[1] Knuth".to_string()]);
        assert_eq!(article.template, TemplateType::Acm);
        assert_eq!(article.content(), "body");
    }

    #[test]
    fn custom_summary_is_recorded() {
        let now = Utc::now();
        let mut article = sample_article("", now);
        article
            .apply_patch(
                ArticlePatch::new()
                    .with_content("intro")
                    .with_changes_summary("wrote the intro"),
                author(),
                vid(),
                now,
            )
            .unwrap();
        assert_eq!(article.version(2).unwrap().changes_summary(), "wrote the intro");
    }

    #[test]
    fn revert_appends_a_copy_of_the_target() {
        let now = Utc::now();
        let mut article = sample_article("", now);
        for text in ["A", "B", "C", "D"] {
            article
                .apply_patch(ArticlePatch::new().with_content(text), author(), vid(), now)
                .unwrap();
        }
        let before: Vec<Version> = article.versions().to_vec();

        article.revert_to(2, author(), vid(), now).unwrap();

        assert_eq!(article.current_version(), 6);
        assert_eq!(article.content(), "A");
        assert_eq!(article.versions().len(), 6);
        assert_eq!(&article.versions()[..5], before.as_slice());
        assert_eq!(
            article.version(6).unwrap().changes_summary(),
            "Reverted to version 2"
        );
        article.check_invariants().unwrap();
    }

    #[test]
    fn revert_to_missing_version_is_not_found() {
        let now = Utc::now();
        let mut article = sample_article("", now);
        for target in [0, 2, 99] {
            let err = article.revert_to(target, author(), vid(), now).unwrap_err();
            assert!(matches!(err, DomainError::NotFound(_)));
        }
        assert_eq!(article.current_version(), 1);
    }

    #[test]
    fn status_patch_stamps_submission_once() {
        let now = Utc::now();
        let mut article = sample_article("", now);
        article
            .apply_patch(
                ArticlePatch::new().with_status(ArticleStatus::Submitted),
                author(),
                vid(),
                now,
            )
            .unwrap();
        let later = now + Duration::hours(1);
        article
            .apply_patch(
                ArticlePatch::new().with_status(ArticleStatus::Submitted),
                author(),
                vid(),
                later,
            )
            .unwrap();

        assert_eq!(article.status(), ArticleStatus::Submitted);
        assert_eq!(article.submitted_at(), Some(now));
        assert!(article.published_at().is_none());
    }

    #[derive(Debug, Clone)]
    enum Step {
        Edit {
            content: Option<String>,
            status: Option<ArticleStatus>,
        },
        Revert(u32),
    }

    fn any_status() -> impl Strategy<Value = ArticleStatus> {
        prop_oneof![
            Just(ArticleStatus::Draft),
            Just(ArticleStatus::InReview),
            Just(ArticleStatus::Revised),
            Just(ArticleStatus::Submitted),
            Just(ArticleStatus::Published),
        ]
    }

    fn any_step() -> impl Strategy<Value = Step> {
        prop_oneof![
            (
                proptest::option::of("[ab]{0,2}"),
                proptest::option::of(any_status())
            )
                .prop_map(|(content, status)| Step::Edit { content, status }),
            (0u32..12).prop_map(Step::Revert),
        ]
    }

    proptest! {
        #[test]
        fn chain_stays_consistent_for_any_edit_and_revert_sequence(
            steps in proptest::collection::vec(any_step(), 0..40)
        ) {
            let now = Utc::now();
            let mut article = sample_article("", now);
            let mut seen: Vec<Version> = article.versions().to_vec();

            for (tick, step) in (1i64..).zip(steps) {
                let at = now + Duration::seconds(tick);
                match step {
                    Step::Edit { content, status } => {
                        let changes = content
                            .as_deref()
                            .is_some_and(|text| text != article.content());
                        let mut patch = ArticlePatch::new();
                        if let Some(text) = content {
                            patch = patch.with_content(text);
                        }
                        if let Some(status) = status {
                            patch = patch.with_status(status);
                        }
                        article.apply_patch(patch, author(), vid(), at).unwrap();
                        prop_assert_eq!(article.versions().len(), seen.len() + usize::from(changes));
                        prop_assert_eq!(article.updated_at(), at);
                    }
                    Step::Revert(target) => {
                        let index = usize::try_from(target).unwrap();
                        let exists = (1..=seen.len()).contains(&index);
                        let result = article.revert_to(target, author(), vid(), at);
                        prop_assert_eq!(result.is_ok(), exists);
                        if exists {
                            prop_assert_eq!(article.content(), seen[index - 1].content());
                        }
                        prop_assert_eq!(article.versions().len(), seen.len() + usize::from(exists));
                    }
                }

                prop_assert!(article.check_invariants().is_ok());
                prop_assert_eq!(&article.versions()[..seen.len()], seen.as_slice());
                seen = article.versions().to_vec();
            }
        }
    }

    #[test]
    fn ordering_puts_recent_updates_first() {
        let now = Utc::now();
        let older = sample_article("", now);
        let newer = sample_article("", now + Duration::seconds(1));
        assert_eq!(recently_updated_first(&newer, &older), Ordering::Less);
        assert_eq!(recently_updated_first(&older, &newer), Ordering::Greater);
    }
}
