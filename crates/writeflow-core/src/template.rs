//! Task templates.
//!
//! Admins keep reusable blueprints for recurring assignments; a template
//! pre-fills a [`TaskDraft`] with its title, description, word count and
//! default tags.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{TaskDraft, TemplateId, WriterId};

/// Template grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateCategory {
    /// Anything without a better home
    #[default]
    General,
    /// Blog posts
    Blog,
    /// Social media copy
    SocialMedia,
    /// Email marketing
    Email,
    /// Product content
    Product,
    /// Technical writing
    Technical,
    /// SEO content
    Seo,
}

impl TemplateCategory {
    /// Wire form of the category
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateCategory::General => "general",
            TemplateCategory::Blog => "blog",
            TemplateCategory::SocialMedia => "social-media",
            TemplateCategory::Email => "email",
            TemplateCategory::Product => "product",
            TemplateCategory::Technical => "technical",
            TemplateCategory::Seo => "seo",
        }
    }
}

impl std::fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input for template creation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateDraft {
    /// Template title; required, unique case-insensitively
    pub title: String,
    /// Requirements text; required
    pub description: String,
    /// Default target length in words
    pub word_count: u32,
    /// Tags applied to every task cut from the template
    pub tags: Vec<String>,
    /// Grouping
    pub category: TemplateCategory,
}

impl TemplateDraft {
    /// Create a draft with the required text fields
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// With default word count
    #[inline]
    #[must_use]
    pub fn with_word_count(mut self, word_count: u32) -> Self {
        self.word_count = word_count;
        self
    }

    /// With default tags
    #[inline]
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// With grouping
    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: TemplateCategory) -> Self {
        self.category = category;
        self
    }
}

/// A stored task blueprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskTemplate {
    /// Template identifier
    pub id: TemplateId,
    /// Template title
    pub title: String,
    /// Requirements text
    pub description: String,
    /// Default target length in words
    pub word_count: u32,
    /// Tags applied on instantiation
    pub tags: Vec<String>,
    /// Grouping
    pub category: TemplateCategory,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl TaskTemplate {
    /// Cut a task draft from the template
    ///
    /// Assignment and deadline are per-task, so the caller supplies them.
    #[must_use]
    pub fn draft(&self, assigned_to: Vec<WriterId>, deadline: Option<NaiveDate>) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            word_count: self.word_count,
            deadline,
            assigned_to,
            tags: self.tags.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_carries_template_defaults() {
        let template = TaskTemplate {
            id: TemplateId::new(),
            title: "Weekly Blog Post".to_string(),
            description: "Industry roundup".to_string(),
            word_count: 800,
            tags: vec!["blog".to_string(), "weekly".to_string()],
            category: TemplateCategory::Blog,
            created_at: Utc::now(),
        };

        let writer = WriterId::new();
        let draft = template.draft(vec![writer], None);

        assert_eq!(draft.title, "Weekly Blog Post");
        assert_eq!(draft.word_count, 800);
        assert_eq!(draft.tags, template.tags);
        assert_eq!(draft.assigned_to, vec![writer]);
        assert!(draft.deadline.is_none());
    }

    #[test]
    fn category_serde_uses_kebab_case() {
        let json = serde_json::to_string(&TemplateCategory::SocialMedia).unwrap();
        assert_eq!(json, "\"social-media\"");
    }
}
