use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One raw result returned by the web-search API for a single query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub url: String,
    pub title: String,
    pub snippet: String,
}

/// A validated company found by the prospecting pipeline.
///
/// `name` is never empty: when the page title is unusable the extractor
/// falls back to a name derived from the domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Canonical, title-cased company name.
    pub name: String,
    /// The page the company was found on.
    pub website: String,
    /// First French-format phone number found on the page.
    pub phone: Option<String>,
    /// First non-placeholder email address found on the page.
    pub email: Option<String>,
}

impl CompanyRecord {
    /// Name key used for every company-name comparison in the workspace.
    #[must_use]
    pub fn normalized_name(&self) -> String {
        normalize_company_name(&self.name)
    }
}

/// Normalizes a company name for deduplication: trimmed and lower-cased.
///
/// The pipeline's seen-name set and [`ExistingCompanyIndex`] both go through
/// this function; if they diverged, cross-matching would silently fail.
#[must_use]
pub fn normalize_company_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Normalized names of companies already present in the CRM.
///
/// Consumed by callers to post-filter pipeline output; it is not part of the
/// pipeline's own dedup state.
#[derive(Debug, Clone, Default)]
pub struct ExistingCompanyIndex {
    names: HashSet<String>,
}

impl ExistingCompanyIndex {
    /// Builds an index from raw names. Blank names are ignored.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|n| normalize_company_name(n.as_ref()))
            .filter(|n| !n.is_empty())
            .collect();
        Self { names }
    }

    /// Loads a newline-delimited list of company names.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileIo`] if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(Self::from_names(content.lines()))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&normalize_company_name(name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Drops records whose normalized name is already known.
    ///
    /// Returns the surviving records in their original order and the number
    /// of records dropped.
    #[must_use]
    pub fn retain_new(&self, records: Vec<CompanyRecord>) -> (Vec<CompanyRecord>, usize) {
        let before = records.len();
        let kept: Vec<CompanyRecord> = records
            .into_iter()
            .filter(|r| !self.names.contains(&r.normalized_name()))
            .collect();
        let dropped = before - kept.len();
        (kept, dropped)
    }
}
