//! Team model.
//!
//! A team is a fixed-size group of students produced by the formation
//! pipeline. Derived attributes (leader, dominant domain, title, true
//! average) are filled in once membership is final.

use serde::{Deserialize, Serialize};

use super::Student;

/// Project lifecycle status.
///
/// Set at creation. The formation and matching engines never change it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamStatus {
    /// Project in progress.
    #[default]
    Active,
    /// Project finished.
    Completed,
    /// Project paused.
    OnHold,
}

/// A project team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Unique team identifier.
    pub id: String,
    /// Display name (e.g., "Team A").
    pub name: String,
    /// Team members, in membership order.
    pub members: Vec<Student>,
    /// ID of the member flagged as leader.
    pub team_lead_id: Option<String>,
    /// ID of the assigned guide.
    pub guide_id: Option<String>,
    /// Derived project title (e.g., "Web Development Project 1").
    pub project_title: String,
    /// Dominant member domain.
    pub domain: String,
    /// Mean of the members' raw percentages.
    pub average_percentage: f64,
    /// Lifecycle status.
    pub status: TeamStatus,
}

impl Team {
    /// Creates an empty active team.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            members: Vec::new(),
            team_lead_id: None,
            guide_id: None,
            project_title: String::new(),
            domain: String::new(),
            average_percentage: 0.0,
            status: TeamStatus::Active,
        }
    }

    /// Sets the domain.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Adds a member and points its `team_id` at this team.
    pub fn with_member(mut self, mut student: Student) -> Self {
        student.team_id = Some(self.id.clone());
        self.members.push(student);
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: TeamStatus) -> Self {
        self.status = status;
        self
    }

    /// Number of members.
    #[inline]
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Mean normalized score of the members (0.0 for an empty team).
    pub fn normalized_average(&self) -> f64 {
        if self.members.is_empty() {
            return 0.0;
        }
        self.normalized_sum() / self.members.len() as f64
    }

    /// Sum of the members' normalized scores.
    pub(crate) fn normalized_sum(&self) -> f64 {
        self.members.iter().map(Student::normalized_percentage).sum()
    }

    /// Total backlogs across all members.
    pub fn total_backlogs(&self) -> u32 {
        self.members.iter().map(|m| m.backlogs).sum()
    }

    /// The member flagged as leader, if any.
    pub fn leader(&self) -> Option<&Student> {
        let lead_id = self.team_lead_id.as_deref()?;
        self.members.iter().find(|m| m.id == lead_id)
    }

    /// Whether the given student is a member.
    pub fn has_member(&self, student_id: &str) -> bool {
        self.members.iter().any(|m| m.id == student_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_builder() {
        let t = Team::new("team-1", "Team A")
            .with_domain("iot")
            .with_member(Student::new("S1", 80.0))
            .with_member(Student::new("S2", 60.0));

        assert_eq!(t.size(), 2);
        assert_eq!(t.status, TeamStatus::Active);
        assert!(t.has_member("S1"));
        assert!(!t.has_member("S3"));
        assert!(t.members.iter().all(|m| m.team_id.as_deref() == Some("team-1")));
    }

    #[test]
    fn test_normalized_average_ignores_backlog_scores() {
        let t = Team::new("t", "T")
            .with_member(Student::new("S1", 80.0))
            .with_member(Student::new("S2", 90.0).with_backlogs(1));

        // (80 + 0) / 2
        assert!((t.normalized_average() - 40.0).abs() < 1e-10);
        assert_eq!(t.total_backlogs(), 1);
    }

    #[test]
    fn test_empty_team_average() {
        assert!((Team::new("t", "T").normalized_average() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_leader_lookup() {
        let mut t = Team::new("t", "T")
            .with_member(Student::new("S1", 80.0))
            .with_member(Student::new("S2", 70.0));
        assert!(t.leader().is_none());

        t.team_lead_id = Some("S2".into());
        assert_eq!(t.leader().map(|s| s.id.as_str()), Some("S2"));
    }
}
