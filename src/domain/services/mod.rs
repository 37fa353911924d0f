mod quote_filter;

pub use quote_filter::{QuoteFilter, QuotePredicate, PAGE_SIZE};
