use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Language, Tag, Translation};

/// The core catalog entity. Reads always return it fully populated:
/// every translation (with its language) and every tag attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub id: i32,
    pub author: String,
    pub created_on: DateTime<Utc>,
    pub valid: bool,
    pub likes: i32,
    pub dislikes: i32,
    pub translations: Vec<Translation>,
    pub tags: Vec<Tag>,
}

impl Quote {
    pub fn new(author: String) -> Self {
        Self {
            id: 0,
            author,
            created_on: Utc::now(),
            valid: false,
            likes: 0,
            dislikes: 0,
            translations: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_translation(mut self, language: Language, message: String) -> Self {
        self.translations.push(Translation::new(language, message));
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Whether any translation is in the given language (case-insensitive).
    pub fn has_language(&self, code: &str) -> bool {
        self.translations.iter().any(|t| t.language.code_matches(code))
    }
}
