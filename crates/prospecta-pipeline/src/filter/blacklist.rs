//! Domain blacklist over a hit's host and, in substring mode, its full URL.

use reqwest::Url;

use super::tables::{BlacklistMatch, FilterTables};

#[derive(Debug, Clone)]
pub struct DomainBlacklist {
    entries: Vec<String>,
    mode: BlacklistMatch,
}

impl DomainBlacklist {
    /// Entries are lower-cased; blank entries are dropped.
    pub fn new<I, S>(entries: I, mode: BlacklistMatch) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries, mode }
    }

    #[must_use]
    pub fn from_tables(tables: &FilterTables) -> Self {
        Self::new(&tables.blacklisted_domains, tables.blacklist_match)
    }

    /// `true` if the URL's host (leading `www.` stripped) matches any entry.
    ///
    /// A URL without a parseable host is compared as a whole, lower-cased.
    #[must_use]
    pub fn is_blacklisted(&self, url: &str) -> bool {
        let host = host_of(url);
        match self.mode {
            BlacklistMatch::Substring => self.entries.iter().any(|e| host.contains(e.as_str())),
            BlacklistMatch::Domain => {
                let dotted_host = format!(".{host}.");
                self.entries
                    .iter()
                    .any(|e| dotted_host.contains(&format!(".{e}.")))
            }
        }
    }

    /// `true` if the hit at `url` must be dropped: its host is blacklisted
    /// or, in substring mode, any entry appears anywhere in the lower-cased
    /// URL (job boards and training pages hosted on company sites).
    #[must_use]
    pub fn blocks_url(&self, url: &str) -> bool {
        if self.is_blacklisted(url) {
            return true;
        }
        match self.mode {
            BlacklistMatch::Substring => {
                let url = url.to_lowercase();
                self.entries.iter().any(|e| url.contains(e.as_str()))
            }
            BlacklistMatch::Domain => false,
        }
    }
}

fn host_of(url: &str) -> String {
    let host = Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_lowercase))
        .unwrap_or_else(|| url.trim().to_lowercase());
    match host.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => host,
    }
}
