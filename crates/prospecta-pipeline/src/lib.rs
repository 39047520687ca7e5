//! Prospecting pipeline: turns a sector keyword into a deduplicated list of
//! French companies with contact details.
//!
//! Expands the keyword into variants, queries the search API for each,
//! rejects non-company hits, scrapes the survivors, and deduplicates by URL
//! and normalized company name. Results can be exported to an
//! `.xlsx` workbook.

pub mod cancel;
pub mod error;
pub mod export;
pub mod filter;
pub mod pipeline;
pub mod variants;

pub use cancel::CancelSignal;
pub use error::{ExportError, PipelineError};
pub use export::{export, ExportStatistics, RECORDS_SHEET, STATISTICS_SHEET};
pub use filter::{BlacklistMatch, DomainBlacklist, FilterTables, HitFilter, Rejection};
pub use pipeline::{PipelineSettings, ProspectingPipeline};
pub use variants::{generate_variants, VariantGenerator, DEFAULT_MAX_VARIANTS};
