//! Prospecting run orchestration.

use std::collections::HashSet;
use std::time::Duration;

use prospecta_core::{AppConfig, CompanyRecord};
use prospecta_scraper::SiteExtractor;
use prospecta_search::SearchClient;

use crate::cancel::CancelSignal;
use crate::error::PipelineError;
use crate::filter::{FilterTables, HitFilter};
use crate::variants::{VariantGenerator, DEFAULT_MAX_VARIANTS};

/// Tunables of one pipeline instance.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub max_variants: usize,
    /// Politeness delay between two variant queries.
    pub variant_delay: Duration,
    /// `num` sent with every search query.
    pub page_size: u32,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            max_variants: DEFAULT_MAX_VARIANTS,
            variant_delay: Duration::from_secs(1),
            page_size: prospecta_search::MAX_PAGE_SIZE,
        }
    }
}

impl PipelineSettings {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            max_variants: config.max_variants,
            variant_delay: Duration::from_millis(config.variant_delay_ms),
            page_size: config.search_page_size,
        }
    }
}

/// URLs and normalized names already handled in the current run.
#[derive(Debug, Default)]
struct SeenSets {
    urls: HashSet<String>,
    names: HashSet<String>,
}

/// Search, filter, extract, and deduplicate companies for a keyword.
///
/// A pipeline holds no per-run state, so one instance can serve any number
/// of sequential or concurrent runs; each run gets its own seen-sets.
pub struct ProspectingPipeline {
    search: SearchClient,
    extractor: SiteExtractor,
    filter: HitFilter,
    variants: VariantGenerator,
    settings: PipelineSettings,
}

impl ProspectingPipeline {
    #[must_use]
    pub fn new(
        search: SearchClient,
        extractor: SiteExtractor,
        filter: HitFilter,
        variants: VariantGenerator,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            search,
            extractor,
            filter,
            variants,
            settings,
        }
    }

    /// Builds every component from configuration. Filter tables come from
    /// `filters_path` when set, otherwise the built-in French tables.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::Search`] for blank credentials or a bad endpoint.
    /// - [`PipelineError::Scraper`] if the site HTTP client cannot be built.
    /// - [`PipelineError::FilterIo`] / [`PipelineError::FilterParse`] for an
    ///   unreadable or invalid filter file.
    pub fn from_config(config: &AppConfig) -> Result<Self, PipelineError> {
        let search = SearchClient::from_config(config)?;
        let extractor = SiteExtractor::from_config(config)?;
        let tables = match &config.filters_path {
            Some(path) => FilterTables::load(path)?,
            None => FilterTables::default(),
        };
        Ok(Self::new(
            search,
            extractor,
            HitFilter::from_tables(&tables),
            VariantGenerator::default(),
            PipelineSettings::from_config(config),
        ))
    }

    /// Runs one prospecting search and returns at most `limit` companies, in
    /// discovery order, with unique source URLs and unique normalized names.
    ///
    /// `limit == 0` returns immediately without any network call. When
    /// `cancel` fires, the companies found so far are returned.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::EmptyKeyword`] for a blank keyword. Search
    /// and extraction failures never surface here.
    pub async fn run(
        &self,
        keyword: &str,
        limit: usize,
        cancel: &CancelSignal,
    ) -> Result<Vec<CompanyRecord>, PipelineError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(PipelineError::EmptyKeyword);
        }
        if limit == 0 {
            return Ok(Vec::new());
        }

        let variants = self.variants.generate(keyword, self.settings.max_variants);
        tracing::info!(
            keyword,
            limit,
            variants = variants.len(),
            "prospecting run started"
        );

        let mut seen = SeenSets::default();
        let mut results: Vec<CompanyRecord> = Vec::new();

        'variants: for (index, variant) in variants.iter().enumerate() {
            if cancel.is_cancelled() {
                tracing::info!(keyword, found = results.len(), "prospecting run cancelled");
                break;
            }
            if results.len() >= limit {
                break;
            }

            let hits = self.search.search(variant, self.settings.page_size).await;

            for hit in hits {
                if cancel.is_cancelled() {
                    tracing::info!(keyword, found = results.len(), "prospecting run cancelled");
                    break 'variants;
                }
                if results.len() >= limit {
                    break;
                }
                if !seen.urls.insert(hit.url.clone()) {
                    continue;
                }
                if let Err(rule) = self.filter.check(&hit.url, &hit.title, &hit.snippet, keyword) {
                    tracing::debug!(url = %hit.url, rule = %rule, "hit rejected");
                    continue;
                }

                let record = self.extractor.extract(&hit.url).await;
                if !seen.names.insert(record.normalized_name()) {
                    tracing::debug!(url = %hit.url, name = %record.name, "duplicate company name");
                    continue;
                }
                results.push(record);
            }

            tracing::info!(variant = %variant, total = results.len(), "variant processed");

            let more_to_do = index + 1 < variants.len() && results.len() < limit;
            if more_to_do && !self.settings.variant_delay.is_zero() {
                tokio::select! {
                    () = tokio::time::sleep(self.settings.variant_delay) => {}
                    () = cancel.cancelled() => {
                        tracing::info!(keyword, found = results.len(), "prospecting run cancelled");
                        break;
                    }
                }
            }
        }

        tracing::info!(keyword, found = results.len(), "prospecting run finished");
        Ok(results)
    }
}
