mod language;
mod quote;
mod tag;
mod translation;

pub use language::Language;
pub use quote::Quote;
pub use tag::Tag;
pub use translation::Translation;
