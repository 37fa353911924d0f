use crate::domain::entities::Quote;
use crate::domain::services::QuoteFilter;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Input for the validate-and-translate workflow.
#[derive(Debug, Clone)]
pub struct QuoteValidation {
    pub id: i32,
    pub author: String,
    /// English source text; written to every target language.
    pub en: String,
}

#[async_trait]
pub trait QuoteRepository: Send + Sync {
    /// List quotes newest-first, narrowed by the filter and paginated when requested.
    /// Every returned quote carries its full translations and tags.
    async fn get_all(&self, filter: &QuoteFilter) -> AppResult<Vec<Quote>>;

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Quote>>;

    /// Adjust each rating counter by the sign of its intent; returns rows written.
    async fn update_rate(&self, id: i32, like: i32, dislike: i32) -> AppResult<usize>;

    async fn save(&self, quote: &Quote) -> AppResult<()>;

    /// Ids of every quote with a translation in the given language (default "EN").
    async fn get_quote_ids(&self, language: Option<&str>) -> AppResult<Vec<i32>>;

    /// Upsert the fixed-language translations and mark the quote validated.
    async fn validate_quote(&self, validation: &QuoteValidation) -> AppResult<()>;
}
