use crate::infrastructure::database::schema::{languages, quote_tags, quotes, tags, translations};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

// ================== QUOTE MODELS ==================

/// DB row model (read)
#[derive(Queryable, Identifiable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = quotes)]
pub struct QuoteModel {
    pub id: i32,
    pub author: String,
    pub created_on: DateTime<Utc>,
    pub valid: bool,
    pub likes: i32,
    pub dislikes: i32,
}

/// Insert payload (write) — `id` is assigned by the database
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = quotes)]
pub struct NewQuote {
    pub author: String,
    pub created_on: DateTime<Utc>,
    pub valid: bool,
    pub likes: i32,
    pub dislikes: i32,
}

// ================== LANGUAGE MODELS ==================

#[derive(Queryable, Identifiable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = languages)]
pub struct LanguageModel {
    pub id: i32,
    pub code: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = languages)]
pub struct NewLanguage {
    pub code: String,
}

// ================== TRANSLATION MODELS ==================

#[derive(Queryable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(QuoteModel, foreign_key = quote_id))]
#[diesel(belongs_to(LanguageModel, foreign_key = language_id))]
#[diesel(table_name = translations)]
pub struct TranslationModel {
    pub id: i32,
    pub quote_id: i32,
    pub language_id: i32,
    pub message: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = translations)]
pub struct NewTranslation {
    pub quote_id: i32,
    pub language_id: i32,
    pub message: String,
}

// ================== TAG MODELS ==================

#[derive(Queryable, Identifiable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = tags)]
pub struct TagModel {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = tags)]
pub struct NewTag {
    pub name: String,
}

// ============= QUOTE-TAG ASSOCIATION (join) =============

#[derive(Queryable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(QuoteModel, foreign_key = quote_id))]
#[diesel(belongs_to(TagModel, foreign_key = tag_id))]
#[diesel(table_name = quote_tags)]
#[diesel(primary_key(quote_id, tag_id))]
pub struct QuoteTagModel {
    pub quote_id: i32,
    pub tag_id: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = quote_tags)]
pub struct NewQuoteTag {
    pub quote_id: i32,
    pub tag_id: i32,
}
