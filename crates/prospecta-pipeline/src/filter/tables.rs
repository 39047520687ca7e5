//! Vocabulary tables driving the blacklist and relevance filters.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Directories, social networks, registries, review sites, job boards, and
/// business-data resellers. Matched against the hit's host.
const BLACKLISTED_DOMAINS: &[&str] = &[
    "wikipedia",
    "fandom",
    "youtube",
    "facebook",
    "twitter",
    "instagram",
    "pinterest",
    "indeed",
    "glassdoor",
    "researchgate",
    "viadeo",
    "top10",
    "gouv",
    "insee",
    "senat",
    "legifrance",
    "linkedin",
    "data.gouv",
    "dalloz",
    "onisep",
    "copainsdavant",
    "societeinfo",
    "societe.com",
    "leboncoin",
    "emploi",
    "formation",
    "cours",
    "stage",
    "offre",
    "amazon",
    "kompass",
    "pagesjaunes",
    "yellowpages",
    "annuaire",
    "123pages",
    "bloomberg",
    "verif",
    "fr-fr.facebook",
    "aboutads",
    "yelp",
    "trustpilot",
    "tripadvisor",
    "apple.com",
    "maps.google",
    "business.site",
    "business.google",
    "crunchbase",
    "sortlist",
    "pagespro",
    "mappy",
    "fr.linkedin.com",
    "fr.viadeo.com",
    "europages",
    "fr.kompass",
    "pappers",
    "dirigeant",
    "infogreffe",
    "manageo",
    "score3",
    "bilan",
    "societe-france",
    "webwiki",
    "hellopro",
];

/// Words in a title or snippet that mark editorial, job, training, or
/// directory content rather than a company page.
const EXCLUDED_TERMS: &[&str] = &[
    "forum",
    "emploi",
    "fiche métier",
    "avis",
    "definition",
    "définition",
    "cours",
    "formation",
    "stage",
    "offre emploi",
    "recrutement",
    "wikipedia",
    "facebook",
    "linkedin",
    "twitter",
    "youtube",
    "annuaire",
    "actualités",
    "blog",
    "article",
    "news",
    "agenda",
    "presse",
    "publicité",
    "magazine",
];

/// Boilerplate homepage titles.
const GENERIC_TITLES: &[&str] = &[
    "accueil",
    "home",
    "presentation",
    "présentation",
    "bienvenue",
    "contact",
    "qui sommes-nous",
    "notre société",
    "index",
    "about",
    "à propos",
    "a propos",
    "main page",
    "page d'accueil",
];

const BUSINESS_TERMS: &[&str] = &[
    "entreprise",
    "société",
    "societe",
    "sarl",
    "sas",
    "établissement",
    "etablissement",
    "professionnel",
    "service",
    "expert",
    "spécialiste",
    "specialiste",
];

/// How blacklist entries are compared with a hit's URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlacklistMatch {
    /// Entry appears anywhere in the URL (`top10` rejects `mytop10plombiers.fr`,
    /// `emploi` rejects `/offres-emploi`).
    #[default]
    Substring,
    /// Entry must be a run of whole host labels: exact host, parent domain,
    /// or a single label (`linkedin` rejects `fr.linkedin.com` but not
    /// `linkedinfo.fr`). The path is never compared.
    Domain,
}

/// Filter vocabulary. [`FilterTables::default`] is the built-in French table;
/// a YAML file may override any subset of fields.
///
/// ```yaml
/// blacklist_match: domain
/// blacklisted_domains: [linkedin, pagesjaunes]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterTables {
    pub blacklisted_domains: Vec<String>,
    pub excluded_terms: Vec<String>,
    pub generic_titles: Vec<String>,
    pub business_terms: Vec<String>,
    pub blacklist_match: BlacklistMatch,
}

impl Default for FilterTables {
    fn default() -> Self {
        Self {
            blacklisted_domains: owned(BLACKLISTED_DOMAINS),
            excluded_terms: owned(EXCLUDED_TERMS),
            generic_titles: owned(GENERIC_TITLES),
            business_terms: owned(BUSINESS_TERMS),
            blacklist_match: BlacklistMatch::default(),
        }
    }
}

impl FilterTables {
    /// Reads tables from a YAML file. Missing fields keep their defaults; an
    /// empty file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::FilterIo`] if the file cannot be read, or
    /// [`PipelineError::FilterParse`] if it is not valid YAML for this shape.
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let raw = std::fs::read_to_string(path).map_err(|source| PipelineError::FilterIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&raw).map_err(|source| PipelineError::FilterParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses tables from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns the `serde_yaml` error if the document does not match.
    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw)
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}
