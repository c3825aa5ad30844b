//! Guide workload metrics.

use serde::{Deserialize, Serialize};

use crate::models::{Guide, GuideAssignment};

/// Workload of a single guide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideWorkload {
    /// Guide ID.
    pub guide_id: String,
    /// Guide name.
    pub guide_name: String,
    /// Teams assigned to this guide.
    pub assigned_teams: usize,
    /// Declared capacity.
    pub max_teams: u32,
    /// `assigned / max × 100`; 0 when `max_teams` is 0.
    pub utilization_rate: f64,
}

/// Summary of guide utilization for an assignment relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideStats {
    /// Number of guides.
    pub total_guides: usize,
    /// Sum of all `max_teams`.
    pub total_capacity: u64,
    /// Number of assignments.
    pub total_assigned: usize,
    /// `assigned / capacity × 100`; 0 when capacity is 0.
    pub utilization_rate: f64,
    /// Per-guide workload, in guide input order.
    pub workload: Vec<GuideWorkload>,
    /// `max(0, 100 - (max rate - min rate))`; 100 with no guides.
    pub balance_score: f64,
    /// Assignments beyond total capacity (0 for any valid matching).
    pub excess_assignments: usize,
}

impl GuideStats {
    /// Computes statistics from guides and their assignments.
    pub fn calculate(guides: &[Guide], assignments: &[GuideAssignment]) -> Self {
        let total_capacity: u64 = guides.iter().map(|g| u64::from(g.max_teams)).sum();
        let total_assigned = assignments.len();
        let utilization_rate = if total_capacity > 0 {
            total_assigned as f64 / total_capacity as f64 * 100.0
        } else {
            0.0
        };

        let workload: Vec<GuideWorkload> = guides
            .iter()
            .map(|g| {
                let assigned_teams = assignments.iter().filter(|a| a.guide_id == g.id).count();
                let utilization_rate = if g.max_teams > 0 {
                    assigned_teams as f64 / f64::from(g.max_teams) * 100.0
                } else {
                    0.0
                };
                GuideWorkload {
                    guide_id: g.id.clone(),
                    guide_name: g.name.clone(),
                    assigned_teams,
                    max_teams: g.max_teams,
                    utilization_rate,
                }
            })
            .collect();

        let balance_score = workload_balance(&workload);
        let excess_assignments = if guides.is_empty() {
            0
        } else {
            (total_assigned as u64).saturating_sub(total_capacity) as usize
        };

        Self {
            total_guides: guides.len(),
            total_capacity,
            total_assigned,
            utilization_rate,
            workload,
            balance_score,
            excess_assignments,
        }
    }

    /// Whether utilization and balance both reach the given minimums.
    pub fn meets_thresholds(&self, min_utilization: f64, min_balance_score: f64) -> bool {
        self.utilization_rate >= min_utilization && self.balance_score >= min_balance_score
    }
}

fn workload_balance(workload: &[GuideWorkload]) -> f64 {
    if workload.is_empty() {
        return 100.0;
    }
    let max_rate = workload
        .iter()
        .map(|w| w.utilization_rate)
        .fold(f64::NEG_INFINITY, f64::max);
    let min_rate = workload
        .iter()
        .map(|w| w.utilization_rate)
        .fold(f64::INFINITY, f64::min);
    (100.0 - (max_rate - min_rate)).max(0.0)
}
