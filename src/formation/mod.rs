//! Balanced team formation.
//!
//! Pipeline: normalize → partition → balance → assign attributes.
//!
//! # Usage
//!
//! ```
//! use u_cohort::formation::{form_teams, TeamFormer, FormationConfig};
//! use u_cohort::models::Student;
//!
//! let students: Vec<Student> = (0..9)
//!     .map(|i| Student::new(format!("S{i}"), 50.0 + i as f64 * 5.0))
//!     .collect();
//!
//! let result = form_teams(&students);
//! assert_eq!(result.teams.len(), 2);
//! assert_eq!(result.unassigned_students.len(), 1);
//!
//! let former = TeamFormer::from_config(FormationConfig::default().with_team_size(3)).unwrap();
//! assert_eq!(former.form(&students).teams.len(), 3);
//! ```

mod attributes;
mod balance;
mod config;
mod partition;

pub use attributes::{assign_attributes, dominant_domain, project_title, select_leader, true_average};
pub use balance::{average_spread, balance_teams, BalanceReport, StopReason};
pub use config::{
    ConfigError, FormationConfig, DEFAULT_BALANCE_THRESHOLD, DEFAULT_MAX_BALANCE_ITERATIONS,
    DEFAULT_TEAM_SIZE,
};
pub use partition::{normalize, partition, sort_by_normalized, team_name, Partition};

use serde::{Deserialize, Serialize};

use crate::models::{Student, Team};

/// Output of team formation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormationResult {
    /// Finalized full-size teams.
    pub teams: Vec<Team>,
    /// Students left over, in descending normalized order.
    pub unassigned_students: Vec<Student>,
    /// How the balancing pass went.
    pub balance: BalanceReport,
}

/// Runs the formation pipeline with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct TeamFormer {
    config: FormationConfig,
}

impl TeamFormer {
    /// Creates a former with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a former from a validated configuration.
    pub fn from_config(config: FormationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &FormationConfig {
        &self.config
    }

    /// Forms balanced teams from `students`.
    ///
    /// Never fails: a cohort smaller than one team yields no teams and
    /// leaves everyone unassigned.
    pub fn form(&self, students: &[Student]) -> FormationResult {
        let Partition {
            mut teams,
            unassigned,
        } = partition(students, self.config.team_size, &self.config.id_prefix);

        let balance = balance_teams(
            &mut teams,
            self.config.max_balance_iterations,
            self.config.balance_threshold,
        );
        assign_attributes(&mut teams, students);

        tracing::debug!(
            student_count = students.len(),
            team_count = teams.len(),
            unassigned_count = unassigned.len(),
            swaps = balance.swaps,
            "Formed teams"
        );

        FormationResult {
            teams,
            unassigned_students: unassigned,
            balance,
        }
    }
}

/// Forms teams of [`DEFAULT_TEAM_SIZE`] with default balancing.
pub fn form_teams(students: &[Student]) -> FormationResult {
    TeamFormer::new().form(students)
}
