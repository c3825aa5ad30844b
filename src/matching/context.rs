//! Matching state passed to guide ranking rules.

use std::collections::BTreeMap;

/// Running state of a matching pass.
///
/// Holds the domain of the team currently being placed and the number of
/// teams each guide has received so far in this pass.
#[derive(Debug, Clone, Default)]
pub struct MatchingContext {
    /// Domain of the team being placed.
    pub domain: String,
    /// Teams assigned so far (guide_id → count).
    pub load: BTreeMap<String, usize>,
}

impl MatchingContext {
    /// Creates a context for the given domain with no load.
    pub fn for_domain(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Default::default()
        }
    }

    /// Sets the load of a guide.
    pub fn with_load(mut self, guide_id: impl Into<String>, teams: usize) -> Self {
        self.load.insert(guide_id.into(), teams);
        self
    }

    /// Teams currently held by a guide (0 if unknown).
    pub fn load_of(&self, guide_id: &str) -> usize {
        self.load.get(guide_id).copied().unwrap_or(0)
    }

    /// Records one more team for a guide.
    pub fn add_load(&mut self, guide_id: &str) {
        *self.load.entry(guide_id.to_string()).or_default() += 1;
    }
}
