//! Sequential multi-rule ranking of guides.
//!
//! Rules are applied in order; a later rule only decides between guides
//! the earlier rules consider equal.

use std::sync::Arc;

use super::{rules, GuideRule, MatchingContext, RuleScore};
use crate::models::Guide;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep the guides' input order (stable sort).
    #[default]
    InputOrder,
    /// Deterministic by guide ID (lexicographic).
    ById,
}

/// A composable guide ranking.
///
/// # Example
/// ```
/// use u_cohort::matching::{rules, GuideRanking, MatchingContext};
/// use u_cohort::models::Guide;
///
/// let ranking = GuideRanking::new()
///     .with_rule(rules::ExpertiseMatch)
///     .with_rule(rules::LeastLoaded);
///
/// let guides = vec![
///     Guide::new("G1").with_expertise("AI"),
///     Guide::new("G2").with_expertise("Web"),
/// ];
/// let ctx = MatchingContext::for_domain("web-development");
/// assert_eq!(ranking.select_best(&guides, &ctx), Some(1));
/// ```
#[derive(Clone)]
pub struct GuideRanking {
    rules: Vec<Arc<dyn GuideRule>>,
    tie_breaker: TieBreaker,
    epsilon: f64,
}

impl GuideRanking {
    /// Creates an empty ranking (input order).
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::InputOrder,
            epsilon: 1e-9,
        }
    }

    /// Load first, then expertise, then declared capacity.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(rules::LeastLoaded)
            .with_rule(rules::ExpertiseMatch)
            .with_rule(rules::MostCapacity)
    }

    /// Appends a rule.
    pub fn with_rule<R: GuideRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Guide indices sorted best first.
    pub fn sort_indices(&self, guides: &[Guide], context: &MatchingContext) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..guides.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&guides[a], &guides[b], context));
        indices
    }

    /// Index of the best guide, if any.
    pub fn select_best(&self, guides: &[Guide], context: &MatchingContext) -> Option<usize> {
        self.sort_indices(guides, context).first().copied()
    }

    /// Scores a single guide under each rule.
    pub fn evaluate(&self, guide: &Guide, context: &MatchingContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|r| r.evaluate(guide, context))
            .collect()
    }

    fn compare(&self, a: &Guide, b: &Guide, context: &MatchingContext) -> std::cmp::Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a, context);
            let score_b = rule.evaluate(b, context);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a
                    .partial_cmp(&score_b)
                    .unwrap_or(std::cmp::Ordering::Equal);
            }
        }

        match self.tie_breaker {
            TieBreaker::InputOrder => std::cmp::Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }
}

impl Default for GuideRanking {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for GuideRanking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuideRanking")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
