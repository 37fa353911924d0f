pub mod quote_repository_impl;

pub use quote_repository_impl::QuoteRepositoryImpl;
