//! Query-to-entity resolution.

use crate::entity::Entity;
use crate::store::DataStore;

/// A candidate entity with its match score (higher is better).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookupHit<'a> {
    pub entity: Entity<'a>,
    pub score: f64,
}

/// Turns a free-text query into ranked candidates, best first.
pub trait Lookup: Send + Sync {
    fn lookup<'s>(&self, store: &'s dyn DataStore, query: &str) -> Vec<LookupHit<'s>>;
}

pub const EXACT_MATCH_SCORE: f64 = 1.0;
pub const PREFIX_MATCH_SCORE: f64 = 0.5;

/// Case-insensitive name matching: exact names first, then prefixes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameLookup;

impl Lookup for NameLookup {
    fn lookup<'s>(&self, store: &'s dyn DataStore, query: &str) -> Vec<LookupHit<'s>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<LookupHit<'s>> = store
            .entities()
            .into_iter()
            .filter_map(|entity| {
                let name = entity.name().to_lowercase();
                let score = if name == query {
                    EXACT_MATCH_SCORE
                } else if name.starts_with(&query) {
                    PREFIX_MATCH_SCORE
                } else {
                    return None;
                };
                Some(LookupHit { entity, score })
            })
            .collect();
        // `entities()` is already in kind/id order and the sort is stable.
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits
    }
}
