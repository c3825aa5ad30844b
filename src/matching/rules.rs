//! Built-in guide ranking rules.
//!
//! # Score Convention
//! All rules return lower scores for guides that should be picked first.

use super::{GuideRule, MatchingContext, RuleScore};
use crate::models::Guide;

/// Least Loaded.
///
/// Prefers guides holding fewer teams in the current pass. Spreads
/// teams across guides before stacking any single guide.
#[derive(Debug, Clone, Copy)]
pub struct LeastLoaded;

impl GuideRule for LeastLoaded {
    fn name(&self) -> &'static str {
        "LOAD"
    }

    fn evaluate(&self, guide: &Guide, context: &MatchingContext) -> RuleScore {
        context.load_of(&guide.id) as f64
    }

    fn description(&self) -> &'static str {
        "Least Loaded"
    }
}

/// Expertise Match.
///
/// Prefers guides with an expertise tag loosely matching the team domain
/// (case-insensitive substring in either direction). Acts as a
/// preference, never as a hard constraint.
#[derive(Debug, Clone, Copy)]
pub struct ExpertiseMatch;

impl GuideRule for ExpertiseMatch {
    fn name(&self) -> &'static str {
        "EXPERTISE"
    }

    fn evaluate(&self, guide: &Guide, context: &MatchingContext) -> RuleScore {
        if guide.matches_domain(&context.domain) {
            0.0
        } else {
            1.0
        }
    }

    fn description(&self) -> &'static str {
        "Expertise Match"
    }
}

/// Most Capacity.
///
/// Prefers guides declaring a larger `max_teams`.
#[derive(Debug, Clone, Copy)]
pub struct MostCapacity;

impl GuideRule for MostCapacity {
    fn name(&self) -> &'static str {
        "CAPACITY"
    }

    fn evaluate(&self, guide: &Guide, _context: &MatchingContext) -> RuleScore {
        -(guide.max_teams as f64)
    }

    fn description(&self) -> &'static str {
        "Most Capacity"
    }
}

/// Most Remaining Capacity.
///
/// Prefers guides with the most free slots left (`max_teams - load`).
/// Not part of the default ranking.
#[derive(Debug, Clone, Copy)]
pub struct MostRemaining;

impl GuideRule for MostRemaining {
    fn name(&self) -> &'static str {
        "REMAINING"
    }

    fn evaluate(&self, guide: &Guide, context: &MatchingContext) -> RuleScore {
        let remaining = (guide.max_teams as usize).saturating_sub(context.load_of(&guide.id));
        -(remaining as f64)
    }

    fn description(&self) -> &'static str {
        "Most Remaining Capacity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_least_loaded() {
        let ctx = MatchingContext::for_domain("ai").with_load("G1", 2);
        assert!((LeastLoaded.evaluate(&Guide::new("G1"), &ctx) - 2.0).abs() < 1e-10);
        assert!((LeastLoaded.evaluate(&Guide::new("G2"), &ctx) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_expertise_match() {
        let ctx = MatchingContext::for_domain("web-development");
        let web = Guide::new("G1").with_expertise("Web");
        let ai = Guide::new("G2").with_expertise("AI");
        assert!(ExpertiseMatch.evaluate(&web, &ctx) < ExpertiseMatch.evaluate(&ai, &ctx));
    }

    #[test]
    fn test_most_capacity() {
        let ctx = MatchingContext::default();
        let big = Guide::new("G1").with_max_teams(5);
        let small = Guide::new("G2").with_max_teams(1);
        assert!(MostCapacity.evaluate(&big, &ctx) < MostCapacity.evaluate(&small, &ctx));
    }

    #[test]
    fn test_most_remaining() {
        let ctx = MatchingContext::default().with_load("G1", 4);
        let busy = Guide::new("G1").with_max_teams(5);
        let idle = Guide::new("G2").with_max_teams(2);
        // G1 has 1 free slot, G2 has 2.
        assert!(MostRemaining.evaluate(&idle, &ctx) < MostRemaining.evaluate(&busy, &ctx));
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(LeastLoaded.name(), "LOAD");
        assert_eq!(ExpertiseMatch.description(), "Expertise Match");
        assert_eq!(MostCapacity.name(), "CAPACITY");
    }
}
