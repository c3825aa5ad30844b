//! Team formation domain models.
//!
//! Provides the core data types for representing a cohort, the teams
//! built from it, and the guides that supervise those teams.
//!
//! # Domain Mappings
//!
//! | u-cohort | Project Course | Hackathon | Clinical Rotation |
//! |----------|----------------|-----------|-------------------|
//! | Student | Student | Participant | Resident |
//! | Team | Project Team | Squad | Rotation Group |
//! | Guide | Faculty Guide | Mentor | Attending |
//! | GuideAssignment | Supervision | Mentorship | Attachment |

mod assignment;
mod guide;
mod student;
mod team;

pub use assignment::GuideAssignment;
pub use guide::Guide;
pub use student::Student;
pub use team::{Team, TeamStatus};
