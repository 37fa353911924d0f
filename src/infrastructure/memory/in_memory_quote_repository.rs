use std::collections::HashSet;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::domain::{
    entities::{Language, Quote, Tag, Translation},
    repositories::{QuoteRepository, QuoteValidation},
    services::QuoteFilter,
};
use crate::shared::errors::{AppError, AppResult};

/// Quote row as stored; relations live in their own maps.
#[derive(Debug, Clone)]
struct QuoteRecord {
    id: i32,
    author: String,
    created_on: DateTime<Utc>,
    valid: bool,
    likes: i32,
    dislikes: i32,
}

#[derive(Debug, Clone)]
struct TranslationRecord {
    id: i32,
    quote_id: i32,
    language: Language,
    message: String,
}

/// Concurrent-map backend for embedded and test deployments.
///
/// Shares all repository semantics with the Postgres backend: listings run
/// through the same filter chain, and mutations follow the same
/// lookup-before-insert rules. Ids are allocated from atomic counters;
/// `save` honors a caller-provided non-zero id so callers that never see
/// the assigned id can still address what they stored.
pub struct InMemoryQuoteRepository {
    quotes: DashMap<i32, QuoteRecord>,
    translations: DashMap<i32, TranslationRecord>,
    languages: DashMap<i32, Language>,
    tags: DashMap<i32, Tag>,
    quote_tags: DashMap<(i32, i32), ()>,
    next_quote_id: AtomicI32,
    next_translation_id: AtomicI32,
    next_language_id: AtomicI32,
    next_tag_id: AtomicI32,
}

impl InMemoryQuoteRepository {
    pub fn new() -> Self {
        Self {
            quotes: DashMap::new(),
            translations: DashMap::new(),
            languages: DashMap::new(),
            tags: DashMap::new(),
            quote_tags: DashMap::new(),
            next_quote_id: AtomicI32::new(1),
            next_translation_id: AtomicI32::new(1),
            next_language_id: AtomicI32::new(1),
            next_tag_id: AtomicI32::new(1),
        }
    }

    /// Register a reference language row.
    pub fn add_language(&self, code: &str) -> Language {
        let id = self.next_language_id.fetch_add(1, Ordering::SeqCst);
        let language = Language::new(id, code.to_string());
        self.languages.insert(id, language.clone());
        language
    }

    /// Register a reference tag row.
    pub fn add_tag(&self, name: &str) -> Tag {
        let id = self.next_tag_id.fetch_add(1, Ordering::SeqCst);
        let tag = Tag::new(id, name.to_string());
        self.tags.insert(id, tag.clone());
        tag
    }

    /// Keep an id counter ahead of an explicitly supplied id.
    fn claim_id(counter: &AtomicI32, requested: i32) -> i32 {
        counter.fetch_max(requested + 1, Ordering::SeqCst);
        requested
    }

    /// Build the fully-populated entity for one stored row.
    fn assemble(&self, record: &QuoteRecord) -> Quote {
        let mut translations: Vec<Translation> = self
            .translations
            .iter()
            .filter(|t| t.quote_id == record.id)
            .map(|t| Translation {
                id: t.id,
                quote_id: t.quote_id,
                language: t.language.clone(),
                message: t.message.clone(),
            })
            .collect();
        translations.sort_by_key(|t| t.id);

        let mut tags: Vec<Tag> = self
            .quote_tags
            .iter()
            .filter(|link| link.key().0 == record.id)
            .filter_map(|link| self.tags.get(&link.key().1).map(|t| t.value().clone()))
            .collect();
        tags.sort_by_key(|t| t.id);

        Quote {
            id: record.id,
            author: record.author.clone(),
            created_on: record.created_on,
            valid: record.valid,
            likes: record.likes,
            dislikes: record.dislikes,
            translations,
            tags,
        }
    }

    fn upsert_translation(
        &self,
        quote_id: i32,
        target_code: &str,
        lookup_code: &str,
        message: &str,
    ) -> AppResult<()> {
        // Oldest stored row wins when duplicates exist.
        let existing = self
            .translations
            .iter()
            .filter(|t| t.quote_id == quote_id && t.language.code == target_code)
            .map(|t| t.id)
            .min();

        match existing {
            Some(translation_id) => {
                if let Some(mut translation) = self.translations.get_mut(&translation_id) {
                    translation.message = message.to_string();
                }
            }
            None => {
                let language = self
                    .languages
                    .iter()
                    .find(|l| l.code == lookup_code)
                    .map(|l| l.value().clone())
                    .ok_or_else(|| {
                        AppError::NotFound(format!("Language with code {} not found", lookup_code))
                    })?;

                let id = self.next_translation_id.fetch_add(1, Ordering::SeqCst);
                self.translations.insert(
                    id,
                    TranslationRecord {
                        id,
                        quote_id,
                        language,
                        message: message.to_string(),
                    },
                );
            }
        }

        Ok(())
    }
}

impl Default for InMemoryQuoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteRepository for InMemoryQuoteRepository {
    async fn get_all(&self, filter: &QuoteFilter) -> AppResult<Vec<Quote>> {
        let mut quotes: Vec<Quote> = self.quotes.iter().map(|r| self.assemble(&r)).collect();
        // Newest first; id breaks ties deterministically.
        quotes.sort_by(|a, b| b.created_on.cmp(&a.created_on).then(b.id.cmp(&a.id)));

        Ok(filter.apply(quotes))
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Quote>> {
        Ok(self.quotes.get(&id).map(|r| self.assemble(&r)))
    }

    async fn update_rate(&self, id: i32, like: i32, dislike: i32) -> AppResult<usize> {
        let mut record = self
            .quotes
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Quote with id {} not found", id)))?;

        if like > 0 {
            record.likes += 1;
        } else if like < 0 {
            record.likes -= 1;
        }

        if dislike > 0 {
            record.dislikes += 1;
        } else if dislike < 0 {
            record.dislikes -= 1;
        }

        Ok(1)
    }

    async fn save(&self, quote: &Quote) -> AppResult<()> {
        let quote_id = if quote.id != 0 {
            Self::claim_id(&self.next_quote_id, quote.id)
        } else {
            self.next_quote_id.fetch_add(1, Ordering::SeqCst)
        };

        self.quotes.insert(
            quote_id,
            QuoteRecord {
                id: quote_id,
                author: quote.author.clone(),
                created_on: quote.created_on,
                valid: quote.valid,
                likes: quote.likes,
                dislikes: quote.dislikes,
            },
        );

        for translation in &quote.translations {
            let translation_id = if translation.id != 0 {
                Self::claim_id(&self.next_translation_id, translation.id)
            } else {
                self.next_translation_id.fetch_add(1, Ordering::SeqCst)
            };
            self.translations.insert(
                translation_id,
                TranslationRecord {
                    id: translation_id,
                    quote_id,
                    language: translation.language.clone(),
                    message: translation.message.clone(),
                },
            );
        }

        for tag in &quote.tags {
            Self::claim_id(&self.next_tag_id, tag.id);
            self.tags.entry(tag.id).or_insert_with(|| tag.clone());
            self.quote_tags.insert((quote_id, tag.id), ());
        }

        Ok(())
    }

    async fn get_quote_ids(&self, language: Option<&str>) -> AppResult<Vec<i32>> {
        let language = language.unwrap_or("EN");

        let matched: HashSet<i32> = self
            .translations
            .iter()
            .filter(|t| t.language.code_matches(language))
            .map(|t| t.quote_id)
            .collect();

        let mut ids: Vec<i32> = self
            .quotes
            .iter()
            .map(|q| q.id)
            .filter(|id| matched.contains(id))
            .collect();
        ids.sort_unstable();

        Ok(ids)
    }

    async fn validate_quote(&self, validation: &QuoteValidation) -> AppResult<()> {
        // Checked up front so a failing call leaves no partial writes.
        if !self.quotes.contains_key(&validation.id) {
            return Err(AppError::NotFound(format!(
                "Quote with id {} not found",
                validation.id
            )));
        }

        self.upsert_translation(validation.id, "EN", "En", &validation.en)?;
        self.upsert_translation(validation.id, "PT-BR", "PT-BR", &validation.en)?;

        if let Some(mut record) = self.quotes.get_mut(&validation.id) {
            record.author = validation.author.clone();
            record.valid = true;
        }

        Ok(())
    }
}
