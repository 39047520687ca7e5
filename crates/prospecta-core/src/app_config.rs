use std::path::PathBuf;

pub const DEFAULT_SEARCH_BASE_URL: &str = "https://www.googleapis.com/customsearch/v1";
pub const DEFAULT_REGISTRY_BASE_URL: &str = "https://recherche-entreprises.api.gouv.fr";
pub const DEFAULT_SITE_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

#[derive(Clone)]
pub struct AppConfig {
    pub search_api_key: String,
    pub search_engine_id: String,
    pub search_base_url: String,
    pub search_timeout_secs: u64,
    pub search_page_size: u32,
    pub search_max_concurrent: usize,
    pub site_timeout_secs: u64,
    pub site_user_agent: String,
    pub max_variants: usize,
    pub variant_delay_ms: u64,
    pub export_dir: PathBuf,
    pub filters_path: Option<PathBuf>,
    pub registry_base_url: String,
    pub registry_timeout_secs: u64,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("search_api_key", &"[redacted]")
            .field("search_engine_id", &self.search_engine_id)
            .field("search_base_url", &self.search_base_url)
            .field("search_timeout_secs", &self.search_timeout_secs)
            .field("search_page_size", &self.search_page_size)
            .field("search_max_concurrent", &self.search_max_concurrent)
            .field("site_timeout_secs", &self.site_timeout_secs)
            .field("site_user_agent", &self.site_user_agent)
            .field("max_variants", &self.max_variants)
            .field("variant_delay_ms", &self.variant_delay_ms)
            .field("export_dir", &self.export_dir)
            .field("filters_path", &self.filters_path)
            .field("registry_base_url", &self.registry_base_url)
            .field("registry_timeout_secs", &self.registry_timeout_secs)
            .field("log_level", &self.log_level)
            .finish()
    }
}
