//! Team-level formation metrics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Team;

/// Teams bucketed by the total backlogs of their members.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacklogDistribution {
    /// No backlogs at all.
    pub none: usize,
    /// 1–2 backlogs.
    pub low: usize,
    /// 3–5 backlogs.
    pub medium: usize,
    /// More than 5 backlogs.
    pub high: usize,
}

impl BacklogDistribution {
    /// Adds one team with `total` backlogs to the matching bucket.
    pub fn record(&mut self, total: u32) {
        match total {
            0 => self.none += 1,
            1..=2 => self.low += 1,
            3..=5 => self.medium += 1,
            _ => self.high += 1,
        }
    }
}

/// Summary of a set of formed teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    /// Number of teams.
    pub total_teams: usize,
    /// Students across all teams.
    pub total_students: usize,
    /// Mean of the teams' true averages.
    pub average_team_percentage: f64,
    /// Teams per dominant domain, ordered by domain label.
    pub domain_distribution: BTreeMap<String, usize>,
    /// Teams per backlog severity bucket.
    pub backlog_distribution: BacklogDistribution,
    /// `max(0, 100 - 2 × spread of true averages)`; 100 with no teams.
    pub team_balance_score: f64,
}

impl TeamStats {
    /// Computes statistics from finalized teams.
    pub fn calculate(teams: &[Team]) -> Self {
        if teams.is_empty() {
            return Self {
                total_teams: 0,
                total_students: 0,
                average_team_percentage: 0.0,
                domain_distribution: BTreeMap::new(),
                backlog_distribution: BacklogDistribution::default(),
                team_balance_score: 100.0,
            };
        }

        let total_students = teams.iter().map(Team::size).sum();
        let average_team_percentage =
            teams.iter().map(|t| t.average_percentage).sum::<f64>() / teams.len() as f64;

        let mut domain_distribution: BTreeMap<String, usize> = BTreeMap::new();
        let mut backlog_distribution = BacklogDistribution::default();
        for team in teams {
            *domain_distribution.entry(team.domain.clone()).or_default() += 1;
            backlog_distribution.record(team.total_backlogs());
        }

        let max_avg = teams
            .iter()
            .map(|t| t.average_percentage)
            .fold(f64::NEG_INFINITY, f64::max);
        let min_avg = teams
            .iter()
            .map(|t| t.average_percentage)
            .fold(f64::INFINITY, f64::min);
        let team_balance_score = (100.0 - (max_avg - min_avg) * 2.0).max(0.0);

        Self {
            total_teams: teams.len(),
            total_students,
            average_team_percentage,
            domain_distribution,
            backlog_distribution,
            team_balance_score,
        }
    }

    /// Whether the teams are at least as balanced as `min_balance_score`.
    pub fn meets_thresholds(&self, min_balance_score: f64) -> bool {
        self.team_balance_score >= min_balance_score
    }
}
