mod quote_repository;

pub use quote_repository::{QuoteRepository, QuoteValidation};
