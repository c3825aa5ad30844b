//! Student model.
//!
//! A student is the unit being partitioned into teams. Two scores are
//! tracked per student:
//!
//! - the **raw** `percentage`, kept for display and for the team's true
//!   average;
//! - the **normalized** score, used for every ordering and balancing
//!   decision. It is forced to zero while the student has backlogs.

use serde::{Deserialize, Serialize};

/// A student available for team formation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Institutional roll number.
    pub roll_number: String,
    /// Raw academic performance (0.0 to 100.0).
    pub percentage: f64,
    /// Number of unresolved failed courses.
    pub backlogs: u32,
    /// Preferred project domain (e.g., "web-development").
    pub domain: String,
    /// Skill tags.
    pub skills: Vec<String>,
    /// Team this student currently belongs to.
    pub team_id: Option<String>,
    /// Whether this student leads their team.
    pub is_team_lead: bool,
}

impl Student {
    /// Creates a student with the given ID and raw percentage.
    pub fn new(id: impl Into<String>, percentage: f64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            email: String::new(),
            roll_number: String::new(),
            percentage,
            backlogs: 0,
            domain: String::new(),
            skills: Vec::new(),
            team_id: None,
            is_team_lead: false,
        }
    }

    /// Sets the student name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the roll number.
    pub fn with_roll_number(mut self, roll_number: impl Into<String>) -> Self {
        self.roll_number = roll_number.into();
        self
    }

    /// Sets the backlog count.
    pub fn with_backlogs(mut self, backlogs: u32) -> Self {
        self.backlogs = backlogs;
        self
    }

    /// Sets the project domain.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Adds a skill tag.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.push(skill.into());
        self
    }

    /// Whether the student has any backlogs.
    #[inline]
    pub fn has_backlogs(&self) -> bool {
        self.backlogs > 0
    }

    /// Score used for ordering and balancing decisions.
    ///
    /// Zero while the student has backlogs, the raw percentage otherwise.
    /// The raw value is never modified.
    #[inline]
    pub fn normalized_percentage(&self) -> f64 {
        if self.has_backlogs() {
            0.0
        } else {
            self.percentage
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_builder() {
        let s = Student::new("S1", 87.5)
            .with_name("Asha")
            .with_email("asha@example.edu")
            .with_roll_number("21CS001")
            .with_domain("machine-learning")
            .with_skill("python")
            .with_skill("pytorch");

        assert_eq!(s.id, "S1");
        assert_eq!(s.name, "Asha");
        assert_eq!(s.roll_number, "21CS001");
        assert_eq!(s.domain, "machine-learning");
        assert_eq!(s.skills.len(), 2);
        assert_eq!(s.backlogs, 0);
        assert!(s.team_id.is_none());
        assert!(!s.is_team_lead);
    }

    #[test]
    fn test_normalized_without_backlogs() {
        let s = Student::new("S1", 72.0);
        assert!(!s.has_backlogs());
        assert!((s.normalized_percentage() - 72.0).abs() < 1e-10);
    }

    #[test]
    fn test_normalized_with_backlogs_keeps_raw() {
        let s = Student::new("S1", 91.0).with_backlogs(2);
        assert!(s.has_backlogs());
        assert!((s.normalized_percentage() - 0.0).abs() < 1e-10);
        assert!((s.percentage - 91.0).abs() < 1e-10);
    }
}
