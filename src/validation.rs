//! Input validation for team formation and guide matching.
//!
//! The engines are total over well-formed input and never reject
//! anything themselves. Callers run these checks first. Detects:
//! - Empty or duplicate IDs
//! - Percentages that are non-finite or outside 0–100
//! - Assignments referencing unknown teams or guides
//! - Teams assigned more than once, guides over capacity

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::models::{Guide, GuideAssignment, Student, Team};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind:?}: {message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// An entity has an empty ID.
    EmptyId,
    /// Two entities share the same ID.
    DuplicateId,
    /// A percentage is NaN, infinite, or outside 0–100.
    InvalidPercentage,
    /// An assignment references a team that doesn't exist.
    UnknownTeam,
    /// An assignment references a guide that doesn't exist.
    UnknownGuide,
    /// A team appears in more than one assignment.
    DuplicateAssignment,
    /// A guide holds more teams than its `max_teams`.
    CapacityExceeded,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the student and guide pools.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_roster(students: &[Student], guides: &[Guide]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut student_ids = HashSet::new();
    for s in students {
        if s.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Student with empty ID",
            ));
        } else if !student_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate student ID: {}", s.id),
            ));
        }

        if !s.percentage.is_finite() || !(0.0..=100.0).contains(&s.percentage) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPercentage,
                format!("Student '{}' has invalid percentage {}", s.id, s.percentage),
            ));
        }
    }

    let mut guide_ids = HashSet::new();
    for g in guides {
        if g.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Guide with empty ID",
            ));
        } else if !guide_ids.insert(g.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate guide ID: {}", g.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates an assignment relation against its teams and guides.
pub fn validate_assignments(
    teams: &[Team],
    guides: &[Guide],
    assignments: &[GuideAssignment],
) -> ValidationResult {
    let mut errors = Vec::new();

    let team_ids: HashSet<&str> = teams.iter().map(|t| t.id.as_str()).collect();
    let capacity: HashMap<&str, u32> = guides.iter().map(|g| (g.id.as_str(), g.max_teams)).collect();

    let mut seen_teams = HashSet::new();
    let mut load: HashMap<&str, usize> = HashMap::new();

    for a in assignments {
        if !team_ids.contains(a.team_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownTeam,
                format!("Assignment references unknown team '{}'", a.team_id),
            ));
        }
        if !capacity.contains_key(a.guide_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownGuide,
                format!("Assignment references unknown guide '{}'", a.guide_id),
            ));
        }
        if !seen_teams.insert(a.team_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateAssignment,
                format!("Team '{}' is assigned more than once", a.team_id),
            ));
        }
        *load.entry(a.guide_id.as_str()).or_default() += 1;
    }

    // Guide input order keeps the error list deterministic.
    for g in guides {
        let held = load.get(g.id.as_str()).copied().unwrap_or(0);
        if held > g.max_teams as usize {
            errors.push(ValidationError::new(
                ValidationErrorKind::CapacityExceeded,
                format!(
                    "Guide '{}' holds {} teams but accepts at most {}",
                    g.id, held, g.max_teams
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
