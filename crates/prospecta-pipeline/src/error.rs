use std::path::PathBuf;

use thiserror::Error;

/// Fatal preconditions of a prospecting run. Everything that happens inside
/// the variant and hit loops is recovered locally and never shows up here.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("keyword must not be empty")]
    EmptyKeyword,

    #[error("search client setup failed: {0}")]
    Search(#[from] prospecta_search::SearchError),

    #[error("site extractor setup failed: {0}")]
    Scraper(#[from] prospecta_scraper::ScraperError),

    #[error("could not read filter tables from {path}: {source}")]
    FilterIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid filter tables in {path}: {source}")]
    FilterParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Why an export could not be written. Logged by [`crate::export::export`],
/// never returned from a run.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not create export directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("workbook write to {path} failed: {source}")]
    Xlsx {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}
