#![allow(dead_code)]
/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use chrono::{DateTime, TimeZone, Utc};
use quotedb::{Language, Quote, Tag};

pub struct QuoteFactory {
    id: i32,
    author: String,
    created_on: DateTime<Utc>,
    valid: bool,
    likes: i32,
    dislikes: i32,
    translations: Vec<(Language, String)>,
    tags: Vec<Tag>,
}

impl Default for QuoteFactory {
    fn default() -> Self {
        Self {
            id: 0,
            author: "Test Author".to_string(),
            created_on: Utc.timestamp_opt(1_600_000_000, 0).unwrap(),
            valid: false,
            likes: 0,
            dislikes: 0,
            translations: Vec::new(),
            tags: Vec::new(),
        }
    }
}

impl QuoteFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.author = author.to_string();
        self
    }

    /// Creation timestamp as seconds offset; listings sort on it descending.
    pub fn created_on(mut self, seconds: i64) -> Self {
        self.created_on = Utc.timestamp_opt(1_600_000_000 + seconds, 0).unwrap();
        self
    }

    pub fn valid(mut self, valid: bool) -> Self {
        self.valid = valid;
        self
    }

    pub fn likes(mut self, likes: i32) -> Self {
        self.likes = likes;
        self
    }

    pub fn dislikes(mut self, dislikes: i32) -> Self {
        self.dislikes = dislikes;
        self
    }

    pub fn translation(mut self, language: &Language, message: &str) -> Self {
        self.translations.push((language.clone(), message.to_string()));
        self
    }

    pub fn tag(mut self, tag: &Tag) -> Self {
        self.tags.push(tag.clone());
        self
    }

    pub fn build(self) -> Quote {
        let mut quote = Quote::new(self.author);
        quote.id = self.id;
        quote.created_on = self.created_on;
        quote.valid = self.valid;
        quote.likes = self.likes;
        quote.dislikes = self.dislikes;
        for (language, message) in self.translations {
            quote = quote.with_translation(language, message);
        }
        for tag in self.tags {
            quote = quote.with_tag(tag);
        }
        quote
    }
}
