//! Guide (advisor) model.
//!
//! Guides are the scarce resource assigned to teams. Each guide declares
//! a set of expertise tags and the maximum number of teams it can take.
//! The current load is not stored here; it is derived from the
//! assignment relation.

use serde::{Deserialize, Serialize};

/// A faculty guide that can supervise teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guide {
    /// Unique guide identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Academic department.
    pub department: String,
    /// Expertise tags (e.g., "AI", "Web Development").
    pub expertise: Vec<String>,
    /// Maximum number of teams this guide can supervise.
    pub max_teams: u32,
}

impl Guide {
    /// Creates a guide with capacity for a single team.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            email: String::new(),
            department: String::new(),
            expertise: Vec::new(),
            max_teams: 1,
        }
    }

    /// Sets the guide name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Adds an expertise tag.
    pub fn with_expertise(mut self, tag: impl Into<String>) -> Self {
        self.expertise.push(tag.into());
        self
    }

    /// Sets the team capacity.
    pub fn with_max_teams(mut self, max_teams: u32) -> Self {
        self.max_teams = max_teams;
        self
    }

    /// Whether any expertise tag loosely matches `domain`.
    ///
    /// A tag matches when either string contains the other,
    /// case-insensitively. An empty tag matches every domain.
    pub fn matches_domain(&self, domain: &str) -> bool {
        let domain = domain.to_lowercase();
        self.expertise.iter().any(|tag| {
            let tag = tag.to_lowercase();
            domain.contains(&tag) || tag.contains(&domain)
        })
    }
}
