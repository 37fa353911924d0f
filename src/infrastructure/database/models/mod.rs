mod quote_model;

pub use quote_model::{
    LanguageModel, NewLanguage, NewQuote, NewQuoteTag, NewTag, NewTranslation, QuoteModel,
    QuoteTagModel, TagModel, TranslationModel,
};
