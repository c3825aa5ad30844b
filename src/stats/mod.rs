//! Formation and matching quality metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Team balance score | max(0, 100 − 2 × (max avg − min avg)) |
//! | Guide utilization | assigned / total capacity × 100 |
//! | Guide balance score | max(0, 100 − (max util − min util)) |
//! | Backlog distribution | teams by total backlogs: 0 / 1–2 / 3–5 / >5 |
//!
//! Both balance scores lie in [0, 100]; higher is better.

mod guide_stats;
mod team_stats;

pub use guide_stats::{GuideStats, GuideWorkload};
pub use team_stats::{BacklogDistribution, TeamStats};
