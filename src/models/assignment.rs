//! Team-guide assignment relation.

use serde::{Deserialize, Serialize};

/// Records that a guide supervises a team.
///
/// A team has at most one guide; a guide may hold several teams up to
/// its `max_teams`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuideAssignment {
    /// Assigned team ID.
    pub team_id: String,
    /// Supervising guide ID.
    pub guide_id: String,
}

impl GuideAssignment {
    /// Creates a new assignment.
    pub fn new(team_id: impl Into<String>, guide_id: impl Into<String>) -> Self {
        Self {
            team_id: team_id.into(),
            guide_id: guide_id.into(),
        }
    }
}
