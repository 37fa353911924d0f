mod in_memory_quote_repository;

pub use in_memory_quote_repository::InMemoryQuoteRepository;
