//! Shared types and configuration for the prospecta workspace.
//!
//! Holds the records that flow between the search, scraper, and pipeline
//! crates, the company-name normalization contract, and the environment
//! configuration loader.

pub mod app_config;
pub mod company;
pub mod config;
pub mod error;

pub use app_config::AppConfig;
pub use company::{normalize_company_name, CompanyRecord, ExistingCompanyIndex, SearchHit};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
