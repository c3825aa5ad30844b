//! Cohort partitioning framework for the U-Engine ecosystem.
//!
//! Splits a pool of students into fixed-size, performance-balanced teams,
//! assigns capacity-constrained guides to those teams, and scores the
//! quality of both results.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Student`, `Team`, `Guide`, `GuideAssignment`
//! - **`formation`**: Normalize → partition → balance → derive attributes
//! - **`matching`**: Greedy guide matching driven by a composable `GuideRanking`
//! - **`stats`**: `TeamStats` and `GuideStats` quality metrics
//! - **`validation`**: Input integrity checks (duplicate IDs, score ranges, capacity)
//!
//! # Operations
//!
//! | Operation | Entry point |
//! |-----------|-------------|
//! | Form teams | [`formation::form_teams`], [`formation::TeamFormer::form`] |
//! | Match guides | [`matching::match_guides`], [`matching::GuideMatcher::assign`] |
//! | Team statistics | [`stats::TeamStats::calculate`] |
//! | Guide statistics | [`stats::GuideStats::calculate`] |
//!
//! Every operation is a deterministic pure function of its inputs: the
//! crate keeps no state between calls.
//!
//! # Example
//!
//! ```
//! use u_cohort::formation::form_teams;
//! use u_cohort::matching::match_guides;
//! use u_cohort::models::{Guide, Student};
//! use u_cohort::stats::{GuideStats, TeamStats};
//!
//! let students: Vec<Student> = (0..8)
//!     .map(|i| Student::new(format!("S{i}"), 90.0 - i as f64 * 5.0).with_domain("ai"))
//!     .collect();
//! let guides = vec![Guide::new("G1").with_expertise("AI").with_max_teams(2)];
//!
//! let formed = form_teams(&students);
//! let matched = match_guides(&formed.teams, &guides);
//!
//! let team_stats = TeamStats::calculate(&formed.teams);
//! let guide_stats = GuideStats::calculate(&guides, &matched.assignments);
//! assert_eq!(team_stats.total_teams, 2);
//! assert!((guide_stats.utilization_rate - 100.0).abs() < 1e-10);
//! ```

pub mod formation;
pub mod matching;
pub mod models;
pub mod stats;
pub mod validation;
