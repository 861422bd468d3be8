// src/domain/article/version.rs
use crate::domain::article::value_objects::{AuthorName, VersionId};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

/// A full-content snapshot. Fields are private so a recorded version cannot be
/// edited after it is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    id: VersionId,
    number: u32,
    content: String,
    author: AuthorName,
    changes_summary: String,
    created_at: DateTime<Utc>,
}

impl Version {
    pub fn id(&self) -> VersionId {
        self.id
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> &AuthorName {
        &self.author
    }

    pub fn changes_summary(&self) -> &str {
        &self.changes_summary
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Everything needed to record a version except its number, which the chain
/// assigns.
#[derive(Debug, Clone)]
pub struct VersionDraft {
    pub id: VersionId,
    pub content: String,
    pub author: AuthorName,
    pub changes_summary: String,
    pub created_at: DateTime<Utc>,
}

impl VersionDraft {
    fn into_version(self, number: u32) -> Version {
        Version {
            id: self.id,
            number,
            content: self.content,
            author: self.author,
            changes_summary: self.changes_summary,
            created_at: self.created_at,
        }
    }
}

/// Append-only history of one article. Version `n` is stored at index `n - 1`
/// and the chain is never empty.
#[derive(Debug, Clone)]
pub struct VersionChain {
    versions: Vec<Version>,
}

impl VersionChain {
    pub const INITIAL_SUMMARY: &'static str = "Initial version";

    /// Start a chain whose first entry is version 1.
    pub fn start(first: VersionDraft) -> Self {
        Self {
            versions: vec![first.into_version(1)],
        }
    }

    /// Record `draft` as the next version. Numbers only ever move forward by one.
    pub fn append(&mut self, draft: VersionDraft) -> &Version {
        let number = self.head_number() + 1;
        self.versions.push(draft.into_version(number));
        &self.versions[self.versions.len() - 1]
    }

    pub fn get(&self, number: u32) -> Option<&Version> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.versions.get(index)
    }

    pub fn history(&self) -> &[Version] {
        &self.versions
    }

    pub fn latest(&self) -> Option<&Version> {
        self.versions.last()
    }

    pub fn head_number(&self) -> u32 {
        self.versions.last().map_or(0, Version::number)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Numbers must read exactly `1..=head`.
    pub fn verify(&self) -> DomainResult<()> {
        if self.versions.is_empty() {
            return Err(DomainError::InvariantViolation(
                "version chain is empty".into(),
            ));
        }
        for (index, version) in self.versions.iter().enumerate() {
            let expected = index + 1;
            if usize::try_from(version.number).ok() != Some(expected) {
                return Err(DomainError::InvariantViolation(format!(
                    "version at position {expected} is numbered {}",
                    version.number
                )));
            }
        }
        Ok(())
    }
}

pub fn update_summary(number: u32) -> String {
    format!("Version {number} update")
}

pub fn revert_summary(target: u32) -> String {
    format!("Reverted to version {target}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    fn draft(content: &str, at: DateTime<Utc>) -> VersionDraft {
        VersionDraft {
            id: VersionId::new(Uuid::new_v4()),
            content: content.into(),
            author: AuthorName::new("ada").unwrap(),
            changes_summary: "edit".into(),
            created_at: at,
        }
    }

    #[test]
    fn start_creates_version_one() {
        let now = Utc::now();
        let chain = VersionChain::start(draft("", now));
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.head_number(), 1);
        assert_eq!(chain.get(1).unwrap().content(), "");
        chain.verify().unwrap();
    }

    #[test]
    fn append_numbers_are_gapless() {
        let now = Utc::now();
        let mut chain = VersionChain::start(draft("a", now));
        for step in 0..5 {
            let appended = chain.append(draft("b", now + Duration::seconds(step)));
            assert_eq!(appended.number(), u32::try_from(step).unwrap() + 2);
        }
        let numbers: Vec<u32> = chain.history().iter().map(Version::number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
        chain.verify().unwrap();
    }

    #[test]
    fn get_misses_outside_the_chain() {
        let chain = VersionChain::start(draft("a", Utc::now()));
        assert!(chain.get(0).is_none());
        assert!(chain.get(2).is_none());
        assert!(chain.get(u32::MAX).is_none());
    }

    #[test]
    fn appending_leaves_earlier_versions_untouched() {
        let now = Utc::now();
        let mut chain = VersionChain::start(draft("first", now));
        let before = chain.get(1).cloned().unwrap();
        chain.append(draft("second", now));
        assert_eq!(chain.get(1), Some(&before));
    }

    #[test]
    fn summaries_name_the_version() {
        assert_eq!(update_summary(4), "Version 4 update");
        assert_eq!(revert_summary(2), "Reverted to version 2");
    }
}
