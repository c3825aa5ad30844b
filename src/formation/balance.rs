//! Bounded local-search balancing of team averages.
//!
//! # Algorithm
//!
//! Greedy hill-climb with first-improvement acceptance, restricted to the
//! extreme pair of teams:
//!
//! 1. Compute each team's normalized average.
//! 2. `high` = first team of a stable descending sort, `low` = last.
//!    Stop if `high - low < threshold`.
//! 3. Scan member pairs (high outer, low inner, membership order) and
//!    perform the first swap that strictly shrinks `|high - low|`.
//! 4. Stop if no pair improves; otherwise repeat, up to the iteration cap.
//!
//! Only the extreme pair is ever examined, so interior teams may stay
//! unbalanced. The result is a local improvement, not an optimum.
//!
//! # Complexity
//! O(k · (t log t + s²)) for k iterations, t teams of size s.

use serde::{Deserialize, Serialize};

use crate::models::Team;

/// Why balancing stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// Spread fell below the threshold.
    Balanced,
    /// No swap between the extreme teams narrows their gap.
    NoImprovingSwap,
    /// Iteration cap reached.
    IterationCap,
    /// Fewer than two teams; nothing to balance.
    TooFewTeams,
}

/// Summary of a balancing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceReport {
    /// Number of swaps performed.
    pub swaps: usize,
    /// Spread of normalized averages before balancing.
    pub initial_spread: f64,
    /// Spread of normalized averages after balancing.
    pub final_spread: f64,
    /// Why the search stopped.
    pub stop_reason: StopReason,
}

impl BalanceReport {
    /// Whether the final spread is within `threshold`.
    pub fn is_balanced(&self, threshold: f64) -> bool {
        self.final_spread < threshold
    }
}

/// Spread between the highest and lowest normalized team averages.
pub fn average_spread(teams: &[Team]) -> f64 {
    match extreme_pair(teams) {
        Some((high, low)) => teams[high].normalized_average() - teams[low].normalized_average(),
        None => 0.0,
    }
}

/// Balances `teams` in place.
///
/// Swaps exchange members between exactly two teams and update both
/// students' `team_id` in the same step.
pub fn balance_teams(teams: &mut [Team], max_iterations: usize, threshold: f64) -> BalanceReport {
    let initial_spread = average_spread(teams);
    let mut swaps = 0;

    let stop_reason = loop {
        if teams.len() < 2 {
            break StopReason::TooFewTeams;
        }
        if swaps >= max_iterations {
            break StopReason::IterationCap;
        }

        let Some((high, low)) = extreme_pair(teams) else {
            break StopReason::TooFewTeams;
        };
        let spread = teams[high].normalized_average() - teams[low].normalized_average();
        tracing::debug!(
            iteration = swaps,
            high_team = %teams[high].id,
            low_team = %teams[low].id,
            spread,
            "Balancing iteration"
        );
        if spread < threshold {
            break StopReason::Balanced;
        }

        match find_improving_swap(&teams[high], &teams[low]) {
            Some((high_pos, low_pos)) => {
                swap_members(teams, (high, high_pos), (low, low_pos));
                swaps += 1;
            }
            None => break StopReason::NoImprovingSwap,
        }
    };

    let report = BalanceReport {
        swaps,
        initial_spread,
        final_spread: average_spread(teams),
        stop_reason,
    };
    tracing::debug!(
        swaps = report.swaps,
        initial_spread = report.initial_spread,
        final_spread = report.final_spread,
        stop_reason = ?report.stop_reason,
        "Balancing finished"
    );
    report
}

/// Indices of the (highest, lowest) average teams.
///
/// Ties follow a stable descending sort: the highest is the first team
/// among equals, the lowest is the last.
fn extreme_pair(teams: &[Team]) -> Option<(usize, usize)> {
    if teams.is_empty() {
        return None;
    }
    let averages: Vec<f64> = teams.iter().map(Team::normalized_average).collect();
    let mut order: Vec<usize> = (0..teams.len()).collect();
    order.sort_by(|&a, &b| averages[b].total_cmp(&averages[a]));
    Some((order[0], order[order.len() - 1]))
}

/// First (high, low) member position pair whose swap narrows the gap.
fn find_improving_swap(high: &Team, low: &Team) -> Option<(usize, usize)> {
    if high.members.is_empty() || low.members.is_empty() {
        return None;
    }
    let high_n = high.size() as f64;
    let low_n = low.size() as f64;
    let high_sum = high.normalized_sum();
    let low_sum = low.normalized_sum();
    let current_diff = (high_sum / high_n - low_sum / low_n).abs();

    for (hi, h) in high.members.iter().enumerate() {
        let h_score = h.normalized_percentage();
        for (li, l) in low.members.iter().enumerate() {
            let l_score = l.normalized_percentage();
            let new_high = (high_sum - h_score + l_score) / high_n;
            let new_low = (low_sum - l_score + h_score) / low_n;
            if (new_high - new_low).abs() < current_diff {
                return Some((hi, li));
            }
        }
    }
    None
}

/// Exchanges two members between distinct teams.
fn swap_members(teams: &mut [Team], (high, high_pos): (usize, usize), (low, low_pos): (usize, usize)) {
    debug_assert_ne!(high, low);
    let (high_team, low_team) = if high < low {
        let (left, right) = teams.split_at_mut(low);
        (&mut left[high], &mut right[0])
    } else {
        let (left, right) = teams.split_at_mut(high);
        (&mut right[0], &mut left[low])
    };

    tracing::trace!(
        from_high = %high_team.members[high_pos].id,
        from_low = %low_team.members[low_pos].id,
        high_team = %high_team.id,
        low_team = %low_team.id,
        "Swapping members"
    );

    std::mem::swap(
        &mut high_team.members[high_pos],
        &mut low_team.members[low_pos],
    );
    high_team.members[high_pos].team_id = Some(high_team.id.clone());
    low_team.members[low_pos].team_id = Some(low_team.id.clone());
}
