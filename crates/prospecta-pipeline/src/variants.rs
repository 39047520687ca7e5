//! Keyword variant generation.
//!
//! One query under-covers a sector, so each search expands the seed keyword
//! with business suffixes and major French cities. Order is deterministic:
//! the seed first, then the four expansion families interleaved round-robin
//! so a small cap still samples every family.

use std::collections::HashSet;

/// Default cap on generated variants.
pub const DEFAULT_MAX_VARIANTS: usize = 8;

const SUFFIXES: &[&str] = &[
    "entreprise",
    "société",
    "professionnel",
    "expert",
    "spécialiste",
    "RGE",
    "bâtiment",
];

const CITIES: &[&str] = &["Paris", "Lyon", "Marseille", "Bordeaux", "Lille", "Nantes"];

#[derive(Debug, Clone)]
pub struct VariantGenerator {
    suffixes: Vec<String>,
    cities: Vec<String>,
}

impl Default for VariantGenerator {
    fn default() -> Self {
        Self::new(SUFFIXES, CITIES)
    }
}

impl VariantGenerator {
    pub fn new<S: AsRef<str>, C: AsRef<str>>(suffixes: &[S], cities: &[C]) -> Self {
        Self {
            suffixes: suffixes.iter().map(|s| s.as_ref().to_string()).collect(),
            cities: cities.iter().map(|c| c.as_ref().to_string()).collect(),
        }
    }

    /// Up to `max_variants` distinct queries for `seed`, the trimmed and
    /// lower-cased seed first. A blank seed yields nothing.
    #[must_use]
    pub fn generate(&self, seed: &str, max_variants: usize) -> Vec<String> {
        let seed = seed.trim().to_lowercase();
        if seed.is_empty() || max_variants == 0 {
            return Vec::new();
        }

        let with_suffix: Vec<String> = self.suffixes.iter().map(|s| format!("{seed} {s}")).collect();
        let with_city: Vec<String> = self.cities.iter().map(|c| format!("{seed} {c}")).collect();
        let suffix_first: Vec<String> = self.suffixes.iter().map(|s| format!("{s} {seed}")).collect();
        let suffix_and_city: Vec<String> = self
            .suffixes
            .iter()
            .flat_map(|s| self.cities.iter().map(move |c| (s, c)))
            .map(|(s, c)| format!("{seed} {s} {c}"))
            .collect();
        let families = [with_suffix, with_city, suffix_first, suffix_and_city];
        let longest = families.iter().map(Vec::len).max().unwrap_or(0);

        let mut seen = HashSet::new();
        let mut variants = Vec::with_capacity(max_variants);
        let candidates = std::iter::once(seed.clone()).chain(
            (0..longest).flat_map(|i| families.iter().filter_map(move |f| f.get(i).cloned())),
        );
        for candidate in candidates {
            if variants.len() >= max_variants {
                break;
            }
            if seen.insert(candidate.clone()) {
                variants.push(candidate);
            }
        }
        variants
    }
}

/// [`VariantGenerator::generate`] with the built-in French tables.
#[must_use]
pub fn generate_variants(seed: &str, max_variants: usize) -> Vec<String> {
    VariantGenerator::default().generate(seed, max_variants)
}
