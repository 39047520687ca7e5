//! Content relevance filter: decides whether a search hit looks like a
//! company's own page for the searched sector.

use std::fmt;

use reqwest::Url;

use super::blacklist::DomainBlacklist;
use super::tables::FilterTables;

/// Normalized titles shorter than this are too generic to name a company.
const MIN_TITLE_CHARS: usize = 6;

/// Keyword tokens must be longer than this to count on their own.
const MIN_KEYWORD_TOKEN_CHARS: usize = 3;

const EDITORIAL_PATH_MARKERS: [&str; 2] = ["blog", "article"];

/// The first rule a rejected hit failed, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Blacklisted,
    EditorialPath,
    ExcludedTerm,
    GenericTitle,
    Irrelevant,
    NoBusinessSignal,
}

impl Rejection {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blacklisted => "blacklisted_domain",
            Self::EditorialPath => "editorial_path",
            Self::ExcludedTerm => "excluded_term",
            Self::GenericTitle => "generic_title",
            Self::Irrelevant => "keyword_absent",
            Self::NoBusinessSignal => "no_business_signal",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conjunctive hit filter: a hit is accepted only if it passes every rule.
#[derive(Debug, Clone)]
pub struct HitFilter {
    blacklist: DomainBlacklist,
    excluded_terms: Vec<String>,
    generic_titles: Vec<String>,
    business_terms: Vec<String>,
}

impl Default for HitFilter {
    fn default() -> Self {
        Self::from_tables(&FilterTables::default())
    }
}

impl HitFilter {
    #[must_use]
    pub fn from_tables(tables: &FilterTables) -> Self {
        Self {
            blacklist: DomainBlacklist::from_tables(tables),
            excluded_terms: lowered(&tables.excluded_terms),
            generic_titles: lowered(&tables.generic_titles),
            business_terms: lowered(&tables.business_terms),
        }
    }

    #[must_use]
    pub fn is_valid_company_hit(&self, url: &str, title: &str, snippet: &str, keyword: &str) -> bool {
        self.check(url, title, snippet, keyword).is_ok()
    }

    /// Runs the rules in order and reports the first one that fails.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] for the first failing rule.
    pub fn check(
        &self,
        url: &str,
        title: &str,
        snippet: &str,
        keyword: &str,
    ) -> Result<(), Rejection> {
        if self.blacklist.blocks_url(url) {
            return Err(Rejection::Blacklisted);
        }

        if has_editorial_path(url) {
            return Err(Rejection::EditorialPath);
        }

        let title_lower = title.to_lowercase();
        let snippet_lower = snippet.to_lowercase();
        let mentions = |term: &str| title_lower.contains(term) || snippet_lower.contains(term);

        if self.excluded_terms.iter().any(|t| mentions(t.as_str())) {
            return Err(Rejection::ExcludedTerm);
        }

        if self.is_generic_title(title) {
            return Err(Rejection::GenericTitle);
        }

        if !keyword_tokens(keyword).iter().any(|t| mentions(t.as_str())) {
            return Err(Rejection::Irrelevant);
        }

        let business_signals = self
            .business_terms
            .iter()
            .filter(|t| mentions(t.as_str()))
            .count();
        if business_signals == 0 {
            return Err(Rejection::NoBusinessSignal);
        }

        Ok(())
    }

    fn is_generic_title(&self, title: &str) -> bool {
        let normalized = title.trim().to_lowercase();
        if normalized.chars().count() < MIN_TITLE_CHARS {
            return true;
        }
        if normalized.split_whitespace().count() <= 1 {
            return true;
        }
        self.generic_titles.iter().any(|g| {
            normalized == *g || normalized.starts_with(g.as_str()) || normalized.ends_with(g.as_str())
        })
    }
}

fn has_editorial_path(url: &str) -> bool {
    let path = Url::parse(url).map_or_else(|_| url.to_lowercase(), |u| u.path().to_lowercase());
    EDITORIAL_PATH_MARKERS.iter().any(|m| path.contains(m))
}

/// The whole keyword plus each of its words longer than three characters,
/// all lower-cased.
fn keyword_tokens(keyword: &str) -> Vec<String> {
    let full = keyword.trim().to_lowercase();
    let mut tokens: Vec<String> = full
        .split_whitespace()
        .filter(|t| t.chars().count() > MIN_KEYWORD_TOKEN_CHARS)
        .map(str::to_string)
        .collect();
    if !full.is_empty() {
        tokens.push(full);
    }
    tokens
}

fn lowered(words: &[String]) -> Vec<String> {
    words
        .iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "relevance_test.rs"]
mod tests;
