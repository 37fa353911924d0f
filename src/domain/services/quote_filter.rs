use crate::domain::entities::Quote;

/// Fixed size of one listing page.
pub const PAGE_SIZE: usize = 6;

/// A single narrowing step over a fully-loaded quote.
pub type QuotePredicate = Box<dyn Fn(&Quote) -> bool + Send + Sync>;

/// Optional listing criteria, combined with logical AND.
///
/// Every criterion is independent and only applied when present, so the
/// composed result is the intersection of each criterion's matching set.
/// `page` is a 1-based window applied after all other criteria; values
/// below 1 are clamped to the first page, and an absent page returns the
/// whole filtered set.
#[derive(Debug, Clone, Default)]
pub struct QuoteFilter {
    pub search: Option<String>,
    pub ids: Option<Vec<i32>>,
    pub tags: Option<Vec<i32>>,
    pub page: Option<i32>,
    pub language: Option<String>,
    pub valid: Option<bool>,
}

impl QuoteFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    pub fn with_ids(mut self, ids: Vec<i32>) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn with_tags(mut self, tags: Vec<i32>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_page(mut self, page: i32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    pub fn with_valid(mut self, valid: bool) -> Self {
        self.valid = Some(valid);
        self
    }

    /// One predicate per active criterion.
    pub fn predicates(&self) -> Vec<QuotePredicate> {
        let mut chain: Vec<QuotePredicate> = Vec::new();

        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            chain.push(Box::new(move |q| {
                q.author.to_lowercase().contains(&needle)
                    || q.translations
                        .iter()
                        .any(|t| t.message.to_lowercase().contains(&needle))
            }));
        }

        if let Some(language) = &self.language {
            let code = language.clone();
            chain.push(Box::new(move |q| q.has_language(&code)));
        }

        if let Some(valid) = self.valid {
            chain.push(Box::new(move |q| q.valid == valid));
        }

        if let Some(tags) = &self.tags {
            if !tags.is_empty() {
                let tags = tags.clone();
                chain.push(Box::new(move |q| q.tags.iter().any(|t| tags.contains(&t.id))));
            }
        }

        if let Some(ids) = &self.ids {
            if !ids.is_empty() {
                let ids = ids.clone();
                chain.push(Box::new(move |q| ids.contains(&q.id)));
            }
        }

        chain
    }

    /// Zero-based index of the first result for a 1-based page, clamped.
    pub fn page_offset(page: i32) -> usize {
        (page.max(1) - 1) as usize * PAGE_SIZE
    }

    /// Narrow an ordered, fully-loaded collection: AND every predicate,
    /// then apply the pagination window when one was requested.
    pub fn apply(&self, quotes: Vec<Quote>) -> Vec<Quote> {
        let chain = self.predicates();
        let filtered = quotes.into_iter().filter(|q| chain.iter().all(|p| p(q)));

        match self.page {
            Some(page) => filtered
                .skip(Self::page_offset(page))
                .take(PAGE_SIZE)
                .collect(),
            None => filtered.collect(),
        }
    }
}
