//! Search-hit filtering: domain blacklist and content relevance rules.

mod blacklist;
mod relevance;
mod tables;

pub use blacklist::DomainBlacklist;
pub use relevance::{HitFilter, Rejection};
pub use tables::{BlacklistMatch, FilterTables};
