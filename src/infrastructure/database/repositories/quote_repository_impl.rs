use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::domain::{
    entities::{Language, Quote, Tag, Translation},
    repositories::{QuoteRepository, QuoteValidation},
    services::{QuoteFilter, PAGE_SIZE},
};
use crate::infrastructure::database::{
    connection::Database,
    models::{
        LanguageModel, NewQuote, NewQuoteTag, NewTranslation, QuoteModel, QuoteTagModel, TagModel,
        TranslationModel,
    },
    schema::{languages, quote_tags, quotes, tags, translations},
};
use crate::log_debug;
use crate::shared::errors::{AppError, AppResult};

pub struct QuoteRepositoryImpl {
    db: Arc<Database>,
}

impl QuoteRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    // Helper: Convert QuoteModel to the fully-populated entity
    fn model_to_entity(model: QuoteModel, translations: Vec<Translation>, tags: Vec<Tag>) -> Quote {
        Quote {
            id: model.id,
            author: model.author,
            created_on: model.created_on,
            valid: model.valid,
            likes: model.likes,
            dislikes: model.dislikes,
            translations,
            tags,
        }
    }
}

#[async_trait]
impl QuoteRepository for QuoteRepositoryImpl {
    // -------------------------------------------------------------------------
    // Public API (listed first for readability)
    // -------------------------------------------------------------------------

    async fn get_all(&self, filter: &QuoteFilter) -> AppResult<Vec<Quote>> {
        use diesel::dsl::sql;
        use diesel::sql_types::{Bool, Text};

        let db = Arc::clone(&self.db);
        let filter = filter.clone();

        let models = task::spawn_blocking(move || -> AppResult<Vec<QuoteModel>> {
            let mut conn = db.get_connection()?;

            let mut query = quotes::table.order(quotes::created_on.desc()).into_boxed();

            if let Some(search) = &filter.search {
                let pattern = format!("%{}%", search);
                let by_message: Vec<i32> = translations::table
                    .filter(translations::message.ilike(pattern.clone()))
                    .select(translations::quote_id)
                    .load::<i32>(&mut conn)?;
                query = query.filter(
                    quotes::author
                        .ilike(pattern)
                        .or(quotes::id.eq_any(by_message)),
                );
            }

            if let Some(language) = &filter.language {
                // Case-insensitive equality with bindings (no interpolation).
                let pred = sql::<Bool>("LOWER(code) = LOWER(")
                    .bind::<Text, _>(language)
                    .sql(")");
                let by_language: Vec<i32> = translations::table
                    .inner_join(languages::table)
                    .filter(pred)
                    .select(translations::quote_id)
                    .load::<i32>(&mut conn)?;
                query = query.filter(quotes::id.eq_any(by_language));
            }

            if let Some(valid) = filter.valid {
                query = query.filter(quotes::valid.eq(valid));
            }

            if let Some(tag_ids) = &filter.tags {
                if !tag_ids.is_empty() {
                    let by_tag: Vec<i32> = quote_tags::table
                        .filter(quote_tags::tag_id.eq_any(tag_ids))
                        .select(quote_tags::quote_id)
                        .load::<i32>(&mut conn)?;
                    query = query.filter(quotes::id.eq_any(by_tag));
                }
            }

            if let Some(ids) = &filter.ids {
                if !ids.is_empty() {
                    query = query.filter(quotes::id.eq_any(ids.clone()));
                }
            }

            if let Some(page) = filter.page {
                query = query
                    .offset(QuoteFilter::page_offset(page) as i64)
                    .limit(PAGE_SIZE as i64);
            }

            let rows = query.load::<QuoteModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        self.load_quotes_with_relations(models).await
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Quote>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<QuoteModel>> {
            let mut conn = db.get_connection()?;
            let m = quotes::table
                .filter(quotes::id.eq(id))
                .first::<QuoteModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        match model {
            Some(m) => {
                let out = self.load_quotes_with_relations(vec![m]).await?;
                Ok(out.into_iter().next())
            }
            None => Ok(None),
        }
    }

    async fn update_rate(&self, id: i32, like: i32, dislike: i32) -> AppResult<usize> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;

            // Read-modify-write without a version check; concurrent raters
            // against the same id can lose updates.
            // TODO: add a version column and switch to optimistic concurrency
            let quote = quotes::table
                .filter(quotes::id.eq(id))
                .first::<QuoteModel>(&mut conn)?;

            let mut likes = quote.likes;
            if like > 0 {
                likes += 1;
            } else if like < 0 {
                likes -= 1;
            }

            let mut dislikes = quote.dislikes;
            if dislike > 0 {
                dislikes += 1;
            } else if dislike < 0 {
                dislikes -= 1;
            }

            let written = diesel::update(quotes::table.filter(quotes::id.eq(id)))
                .set((quotes::likes.eq(likes), quotes::dislikes.eq(dislikes)))
                .execute(&mut conn)?;

            Ok(written)
        })
        .await?
    }

    async fn save(&self, quote: &Quote) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let quote = quote.clone();

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;

            conn.transaction::<_, AppError, _>(|conn| {
                let new_row = NewQuote {
                    author: quote.author.clone(),
                    created_on: quote.created_on,
                    valid: quote.valid,
                    likes: quote.likes,
                    dislikes: quote.dislikes,
                };

                let saved = diesel::insert_into(quotes::table)
                    .values(&new_row)
                    .get_result::<QuoteModel>(conn)?;

                for translation in &quote.translations {
                    let new_translation = NewTranslation {
                        quote_id: saved.id,
                        language_id: translation.language.id,
                        message: translation.message.clone(),
                    };
                    diesel::insert_into(translations::table)
                        .values(&new_translation)
                        .execute(conn)?;
                }

                for tag in &quote.tags {
                    let link = NewQuoteTag {
                        quote_id: saved.id,
                        tag_id: tag.id,
                    };
                    // relies on PRIMARY KEY (quote_id, tag_id) in DB
                    diesel::insert_into(quote_tags::table)
                        .values(&link)
                        .on_conflict((quote_tags::quote_id, quote_tags::tag_id))
                        .do_nothing()
                        .execute(conn)?;
                }

                log_debug!(
                    "Saved quote {} with {} translations and {} tags",
                    saved.id,
                    quote.translations.len(),
                    quote.tags.len()
                );

                Ok(())
            })
        })
        .await?
    }

    async fn get_quote_ids(&self, language: Option<&str>) -> AppResult<Vec<i32>> {
        use diesel::dsl::sql;
        use diesel::sql_types::{Bool, Text};

        let db = Arc::clone(&self.db);
        let language = language.unwrap_or("EN").to_string();

        task::spawn_blocking(move || -> AppResult<Vec<i32>> {
            let mut conn = db.get_connection()?;

            let pred = sql::<Bool>("LOWER(code) = LOWER(")
                .bind::<Text, _>(&language)
                .sql(")");
            let by_language: Vec<i32> = translations::table
                .inner_join(languages::table)
                .filter(pred)
                .select(translations::quote_id)
                .load::<i32>(&mut conn)?;

            let ids = quotes::table
                .filter(quotes::id.eq_any(by_language))
                .select(quotes::id)
                .load::<i32>(&mut conn)?;
            Ok(ids)
        })
        .await?
    }

    async fn validate_quote(&self, validation: &QuoteValidation) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let validation = validation.clone();

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;

            conn.transaction::<_, AppError, _>(|conn| {
                // Existing translations are matched against the stored code
                // exactly as written; the English create path looks the
                // language row up under "En". Both targets receive the same
                // English text.
                Self::upsert_translation(conn, validation.id, "EN", "En", &validation.en)?;
                Self::upsert_translation(conn, validation.id, "PT-BR", "PT-BR", &validation.en)?;

                let quote = quotes::table
                    .filter(quotes::id.eq(validation.id))
                    .first::<QuoteModel>(conn)?;

                diesel::update(quotes::table.filter(quotes::id.eq(quote.id)))
                    .set((
                        quotes::author.eq(&validation.author),
                        quotes::valid.eq(true),
                    ))
                    .execute(conn)?;

                log_debug!("Validated quote {}", quote.id);

                Ok(())
            })
        })
        .await?
    }
}

// -----------------------------------------------------------------------------
// Private helpers (kept after public API for readability)
// -----------------------------------------------------------------------------

impl QuoteRepositoryImpl {
    /// Overwrite the first translation of the quote stored under `target_code`,
    /// or create one linked to the language row stored under `lookup_code`.
    fn upsert_translation(
        conn: &mut PgConnection,
        quote_id: i32,
        target_code: &str,
        lookup_code: &str,
        message: &str,
    ) -> AppResult<()> {
        let existing: Option<i32> = translations::table
            .inner_join(languages::table)
            .filter(translations::quote_id.eq(quote_id))
            .filter(languages::code.eq(target_code))
            .select(translations::id)
            .first::<i32>(conn)
            .optional()?;

        match existing {
            Some(translation_id) => {
                diesel::update(translations::table.filter(translations::id.eq(translation_id)))
                    .set(translations::message.eq(message))
                    .execute(conn)?;
            }
            None => {
                let language_id = languages::table
                    .filter(languages::code.eq(lookup_code))
                    .select(languages::id)
                    .first::<i32>(conn)?;

                let new_translation = NewTranslation {
                    quote_id,
                    language_id,
                    message: message.to_string(),
                };
                diesel::insert_into(translations::table)
                    .values(&new_translation)
                    .execute(conn)?;
            }
        }

        Ok(())
    }

    /// Eager-load translations (with language) and tags in batch.
    async fn load_quotes_with_relations(
        &self,
        quote_models: Vec<QuoteModel>,
    ) -> AppResult<Vec<Quote>> {
        if quote_models.is_empty() {
            return Ok(Vec::new());
        }

        let db = Arc::clone(&self.db);

        let results = task::spawn_blocking(move || -> AppResult<Vec<Quote>> {
            let mut conn = db.get_connection()?;

            // TRANSLATIONS (with language)
            let pairs_t: Vec<(TranslationModel, LanguageModel)> =
                TranslationModel::belonging_to(&quote_models)
                    .inner_join(languages::table)
                    .select((translations::all_columns, languages::all_columns))
                    .load::<(TranslationModel, LanguageModel)>(&mut conn)?;
            let grouped_t = pairs_t.grouped_by(&quote_models);
            let translations_by_quote: HashMap<i32, Vec<Translation>> = quote_models
                .iter()
                .zip(grouped_t)
                .map(|(q, pairs)| {
                    (
                        q.id,
                        pairs
                            .into_iter()
                            .map(|(t, l)| Translation {
                                id: t.id,
                                quote_id: t.quote_id,
                                language: Language {
                                    id: l.id,
                                    code: l.code,
                                },
                                message: t.message,
                            })
                            .collect(),
                    )
                })
                .collect();

            // TAGS
            let pairs_g: Vec<(QuoteTagModel, TagModel)> =
                QuoteTagModel::belonging_to(&quote_models)
                    .inner_join(tags::table)
                    .select((quote_tags::all_columns, tags::all_columns))
                    .load::<(QuoteTagModel, TagModel)>(&mut conn)?;
            let grouped_g = pairs_g.grouped_by(&quote_models);
            let tags_by_quote: HashMap<i32, Vec<Tag>> = quote_models
                .iter()
                .zip(grouped_g)
                .map(|(q, pairs)| {
                    (
                        q.id,
                        pairs
                            .into_iter()
                            .map(|(_, t)| Tag {
                                id: t.id,
                                name: t.name,
                            })
                            .collect(),
                    )
                })
                .collect();

            // BUILD
            let out = quote_models
                .into_iter()
                .map(|m| {
                    let translations = translations_by_quote.get(&m.id).cloned().unwrap_or_default();
                    let tags = tags_by_quote.get(&m.id).cloned().unwrap_or_default();
                    Self::model_to_entity(m, translations, tags)
                })
                .collect::<Vec<_>>();

            Ok(out)
        })
        .await??;

        Ok(results)
    }
}
