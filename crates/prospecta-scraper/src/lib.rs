//! Company website scraping: fetches a candidate page and extracts a
//! canonical company name, a French phone number, and an email address.

pub mod error;
pub mod extract;
pub mod extractor;

mod fetch;

pub use error::ScraperError;
pub use extractor::SiteExtractor;
