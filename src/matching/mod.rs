//! Guide matching for formed teams.
//!
//! Assigns capacity-constrained guides to teams with a greedy pass whose
//! preference order is expressed as a composable ranking of rules.
//!
//! # Usage
//!
//! ```
//! use u_cohort::matching::match_guides;
//! use u_cohort::models::{Guide, Team};
//!
//! let teams = vec![Team::new("T1", "Team A").with_domain("ai")];
//! let guides = vec![Guide::new("G1").with_expertise("AI").with_max_teams(2)];
//!
//! let result = match_guides(&teams, &guides);
//! assert_eq!(result.guide_for("T1"), Some("G1"));
//! ```

mod context;
mod matcher;
mod ranking;
pub mod rules;

pub use context::MatchingContext;
pub use matcher::{match_guides, GuideMatcher, MatchResult};
pub use ranking::{GuideRanking, TieBreaker};

use crate::models::Guide;
use std::fmt::Debug;

/// Score returned by a guide rule.
///
/// Lower scores = picked first.
pub type RuleScore = f64;

/// A rule that scores how suitable a guide is for the current team.
///
/// # Score Convention
/// **Lower score = higher preference.**
///
/// [`GuideRanking`] treats scores within `1e-9` of each other as equal and
/// falls through to the next rule. Scores should therefore be spaced
/// further apart than that (the built-in rules return whole numbers);
/// closely spaced fractional scores can make the comparison non-transitive,
/// and the resulting order is then unspecified.
pub trait GuideRule: Send + Sync + Debug {
    /// Rule name (e.g., "LOAD").
    fn name(&self) -> &'static str;

    /// Scores a guide given the current matching state.
    fn evaluate(&self, guide: &Guide, context: &MatchingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
