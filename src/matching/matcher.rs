//! Greedy capacity-constrained guide matcher.
//!
//! # Algorithm
//!
//! 1. Group teams by domain, keeping first-appearance order.
//! 2. For each domain, for each team in input order, rank all guides
//!    against the current load and pick the best one with a free slot.
//! 3. Increment that guide's load before ranking the next team.
//!
//! Ranking is recomputed for every team, so earlier placements shape
//! later ones and processing order matters.
//!
//! # Complexity
//! O(t · g log g) for t teams and g guides.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{GuideRanking, MatchingContext};
use crate::models::{Guide, GuideAssignment, Team};

/// Output of a matching pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Team → guide assignments, in placement order.
    pub assignments: Vec<GuideAssignment>,
    /// Teams no guide had room for.
    pub unassigned_teams: Vec<Team>,
    /// Teams per guide (guide_id → count), ordered by guide ID.
    /// Empty when no guides exist.
    pub guide_load: BTreeMap<String, usize>,
}

impl MatchResult {
    /// Guide assigned to a team, if any.
    pub fn guide_for(&self, team_id: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|a| a.team_id == team_id)
            .map(|a| a.guide_id.as_str())
    }

    /// Teams assigned to a guide, in placement order.
    pub fn teams_for(&self, guide_id: &str) -> Vec<&str> {
        self.assignments
            .iter()
            .filter(|a| a.guide_id == guide_id)
            .map(|a| a.team_id.as_str())
            .collect()
    }

    /// Writes `guide_id` onto each team from this result.
    ///
    /// Teams without an assignment get `None`.
    pub fn apply_to_teams(&self, teams: &mut [Team]) {
        for team in teams {
            team.guide_id = self.guide_for(&team.id).map(str::to_string);
        }
    }
}

/// Assigns guides to teams using a [`GuideRanking`].
#[derive(Debug, Clone, Default)]
pub struct GuideMatcher {
    ranking: GuideRanking,
}

impl GuideMatcher {
    /// Creates a matcher with the standard ranking.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the ranking.
    pub fn with_ranking(mut self, ranking: GuideRanking) -> Self {
        self.ranking = ranking;
        self
    }

    /// Matches every team to at most one guide.
    ///
    /// No guide ever receives more than `max_teams` teams.
    pub fn assign(&self, teams: &[Team], guides: &[Guide]) -> MatchResult {
        if guides.is_empty() {
            tracing::debug!(
                team_count = teams.len(),
                "No guides available, all teams unassigned"
            );
            return MatchResult {
                assignments: Vec::new(),
                unassigned_teams: teams.to_vec(),
                guide_load: BTreeMap::new(),
            };
        }

        let mut context = MatchingContext::default();
        for guide in guides {
            context.load.insert(guide.id.clone(), 0);
        }

        let mut assignments = Vec::new();
        let mut unassigned_teams = Vec::new();

        for (domain, domain_teams) in group_by_domain(teams) {
            context.domain = domain.to_string();
            for team in domain_teams {
                let chosen = self
                    .ranking
                    .sort_indices(guides, &context)
                    .into_iter()
                    .map(|i| &guides[i])
                    .find(|g| context.load_of(&g.id) < g.max_teams as usize);

                match chosen {
                    Some(guide) => {
                        tracing::trace!(
                            team_id = %team.id,
                            guide_id = %guide.id,
                            domain,
                            load = context.load_of(&guide.id) + 1,
                            "Assigned guide"
                        );
                        context.add_load(&guide.id);
                        assignments.push(GuideAssignment::new(&team.id, &guide.id));
                    }
                    None => {
                        tracing::trace!(team_id = %team.id, domain, "No guide capacity left");
                        unassigned_teams.push(team.clone());
                    }
                }
            }
        }

        tracing::debug!(
            team_count = teams.len(),
            guide_count = guides.len(),
            assigned = assignments.len(),
            unassigned = unassigned_teams.len(),
            "Matched guides"
        );

        MatchResult {
            assignments,
            unassigned_teams,
            guide_load: context.load,
        }
    }
}

/// Matches guides with the standard ranking.
pub fn match_guides(teams: &[Team], guides: &[Guide]) -> MatchResult {
    GuideMatcher::new().assign(teams, guides)
}

/// Teams grouped by domain, domains in first-appearance order.
fn group_by_domain(teams: &[Team]) -> Vec<(&str, Vec<&Team>)> {
    let mut groups: Vec<(&str, Vec<&Team>)> = Vec::new();
    for team in teams {
        match groups.iter_mut().find(|(d, _)| *d == team.domain) {
            Some((_, members)) => members.push(team),
            None => groups.push((team.domain.as_str(), vec![team])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{rules, TieBreaker};

    fn team(id: &str, domain: &str) -> Team {
        Team::new(id, id).with_domain(domain)
    }

    #[test]
    fn test_no_guides() {
        let teams = vec![team("T1", "ai"), team("T2", "web")];
        let result = match_guides(&teams, &[]);

        assert!(result.assignments.is_empty());
        assert_eq!(result.unassigned_teams.len(), 2);
        assert!(result.guide_load.is_empty());
    }

    #[test]
    fn test_capacity_respected() {
        let teams: Vec<Team> = ["ai", "web", "ai", "iot", "web"]
            .iter()
            .enumerate()
            .map(|(i, d)| team(&format!("T{}", i + 1), d))
            .collect();
        let guides = vec![
            Guide::new("G1").with_max_teams(2),
            Guide::new("G2").with_max_teams(1),
            Guide::new("G3").with_max_teams(1),
        ];
        let result = match_guides(&teams, &guides);

        assert_eq!(result.assignments.len(), 4);
        assert_eq!(result.unassigned_teams.len(), 1);
        for g in &guides {
            assert!(result.guide_load[&g.id] <= g.max_teams as usize);
        }
        // Domain grouping: ai (T1, T3), web (T2, T5), iot (T4). The iot team
        // comes last and finds every guide full.
        assert_eq!(result.unassigned_teams[0].id, "T4");
    }

    #[test]
    fn test_domains_processed_in_first_appearance_order() {
        let teams = vec![team("T1", "web"), team("T2", "ai"), team("T3", "web")];
        let guides = vec![Guide::new("G1").with_max_teams(2)];
        let result = match_guides(&teams, &guides);

        let order: Vec<&str> = result.assignments.iter().map(|a| a.team_id.as_str()).collect();
        assert_eq!(order, vec!["T1", "T3"]);
        assert_eq!(result.unassigned_teams[0].id, "T2");
    }

    #[test]
    fn test_expertise_preferred_at_equal_load() {
        let teams = vec![team("T1", "machine-learning")];
        let guides = vec![
            Guide::new("G1").with_expertise("Networks").with_max_teams(4),
            Guide::new("G2").with_expertise("Machine-Learning").with_max_teams(1),
        ];
        let result = match_guides(&teams, &guides);
        assert_eq!(result.guide_for("T1"), Some("G2"));
    }

    #[test]
    fn test_load_spreads_before_expertise() {
        let teams = vec![team("T1", "ai"), team("T2", "ai")];
        let guides = vec![
            Guide::new("G1").with_expertise("AI").with_max_teams(3),
            Guide::new("G2").with_expertise("Web").with_max_teams(3),
        ];
        let result = match_guides(&teams, &guides);

        assert_eq!(result.guide_for("T1"), Some("G1"));
        assert_eq!(result.guide_for("T2"), Some("G2"));
        assert_eq!(result.guide_load["G1"], 1);
        assert_eq!(result.guide_load["G2"], 1);
    }

    #[test]
    fn test_zero_capacity_guide_never_used() {
        let teams = vec![team("T1", "ai")];
        let guides = vec![Guide::new("G1").with_expertise("AI").with_max_teams(0)];
        let result = match_guides(&teams, &guides);

        assert!(result.assignments.is_empty());
        assert_eq!(result.unassigned_teams.len(), 1);
        assert_eq!(result.guide_load["G1"], 0);
    }

    #[test]
    fn test_apply_to_teams() {
        let mut teams = vec![team("T1", "ai"), team("T2", "ai")];
        let guides = vec![Guide::new("G1")];
        let result = match_guides(&teams, &guides);
        result.apply_to_teams(&mut teams);

        assert_eq!(teams[0].guide_id.as_deref(), Some("G1"));
        assert!(teams[1].guide_id.is_none());
    }

    #[test]
    fn test_teams_for_guide() {
        let teams = vec![team("T1", "ai"), team("T2", "web"), team("T3", "ai")];
        let guides = vec![
            Guide::new("G1").with_expertise("AI").with_max_teams(2),
            Guide::new("G2").with_expertise("Web").with_max_teams(1),
        ];
        let result = match_guides(&teams, &guides);

        // ai: T1 → G1, T3 → G2 (less loaded); web: T2 → G1.
        assert_eq!(result.teams_for("G1"), vec!["T1", "T2"]);
        assert_eq!(result.teams_for("G2"), vec!["T3"]);
        assert!(result.teams_for("G9").is_empty());
    }

    #[test]
    fn test_guide_load_is_ordered_by_id() {
        let teams = vec![team("T1", "ai")];
        let guides = vec![Guide::new("G3"), Guide::new("G1"), Guide::new("G2")];
        let result = match_guides(&teams, &guides);

        let keys: Vec<&str> = result.guide_load.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["G1", "G2", "G3"]);
    }

    #[test]
    fn test_custom_ranking() {
        let teams = vec![team("T1", "ai")];
        let guides = vec![Guide::new("B"), Guide::new("A")];
        let matcher = GuideMatcher::new().with_ranking(
            GuideRanking::new()
                .with_rule(rules::LeastLoaded)
                .with_tie_breaker(TieBreaker::ById),
        );
        assert_eq!(matcher.assign(&teams, &guides).guide_for("T1"), Some("A"));
    }

    #[test]
    fn test_idempotent() {
        let teams = vec![team("T1", "ai"), team("T2", "web"), team("T3", "ai")];
        let guides = vec![
            Guide::new("G1").with_expertise("AI").with_max_teams(2),
            Guide::new("G2").with_expertise("Web"),
        ];
        assert_eq!(match_guides(&teams, &guides), match_guides(&teams, &guides));
    }
}
