pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use domain::entities::{Language, Quote, Tag, Translation};
pub use domain::repositories::{QuoteRepository, QuoteValidation};
pub use domain::services::{QuoteFilter, PAGE_SIZE};
pub use infrastructure::database::connection::Database;
pub use infrastructure::database::repositories::QuoteRepositoryImpl;
pub use infrastructure::memory::InMemoryQuoteRepository;
pub use shared::errors::{AppError, AppResult};
pub use shared::utils::logger::init_logger;
