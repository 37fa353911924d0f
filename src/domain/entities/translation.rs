use serde::{Deserialize, Serialize};

use super::Language;

/// A language-specific text body belonging to one quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    pub id: i32,
    pub quote_id: i32,
    pub language: Language,
    pub message: String,
}

impl Translation {
    /// Build a translation not yet attached to a persisted quote; the store
    /// fills in `id` and `quote_id` on save.
    pub fn new(language: Language, message: String) -> Self {
        Self {
            id: 0,
            quote_id: 0,
            language,
            message,
        }
    }
}
