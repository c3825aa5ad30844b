//! Round-robin partitioning of a sorted cohort.
//!
//! # Algorithm
//!
//! 1. Stable-sort students by normalized score, descending.
//! 2. `team_count = floor(n / team_size)`.
//! 3. The first `team_count * team_size` students are assignable; the
//!    tail (weakest normalized scores) is left unassigned.
//! 4. Sorted index `i` goes to team `i mod team_count`.
//!
//! Dealing the sorted sequence across teams alternates strong and weak
//! students, which gives an even head count and a coarse initial balance.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for distribution.

use crate::models::{Student, Team};

/// Teams produced by partitioning plus the students left over.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    /// Full-size teams, in creation order.
    pub teams: Vec<Team>,
    /// Students not placed in any team, weakest last.
    pub unassigned: Vec<Student>,
}

/// Normalized score of every student, in input order.
pub fn normalize(students: &[Student]) -> Vec<f64> {
    students.iter().map(Student::normalized_percentage).collect()
}

/// Returns a copy of `students` sorted by normalized score, descending.
///
/// The sort is stable: equal scores keep their input order.
pub fn sort_by_normalized(students: &[Student]) -> Vec<Student> {
    let scores = normalize(students);
    let mut order: Vec<usize> = (0..students.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order.into_iter().map(|i| students[i].clone()).collect()
}

/// Display name for the team at zero-based `index`.
///
/// `0 → "Team A"`, `25 → "Team Z"`, `26 → "Team AA"`.
pub fn team_name(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push((b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    let label: String = letters.into_iter().rev().collect();
    format!("Team {label}")
}

/// Splits `students` into `floor(n / team_size)` equal teams.
///
/// Membership flags are reset: members get the new `team_id` and
/// unassigned students get none. Nobody is flagged as leader yet.
/// A `team_size` of zero forms no teams.
pub fn partition(students: &[Student], team_size: usize, id_prefix: &str) -> Partition {
    let mut sorted = sort_by_normalized(students);
    for s in &mut sorted {
        s.team_id = None;
        s.is_team_lead = false;
    }

    let team_count = if team_size == 0 {
        0
    } else {
        sorted.len() / team_size
    };
    if team_count == 0 {
        return Partition {
            teams: Vec::new(),
            unassigned: sorted,
        };
    }

    let mut teams: Vec<Team> = (0..team_count)
        .map(|i| Team::new(format!("{id_prefix}-{}", i + 1), team_name(i)))
        .collect();

    let unassigned = sorted.split_off(team_count * team_size);
    for (i, student) in sorted.into_iter().enumerate() {
        let team = &mut teams[i % team_count];
        team.members.push(Student {
            team_id: Some(team.id.clone()),
            ..student
        });
    }

    Partition { teams, unassigned }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cohort(scores: &[f64]) -> Vec<Student> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &p)| Student::new(format!("S{}", i + 1), p))
            .collect()
    }

    fn ids(students: &[Student]) -> Vec<&str> {
        students.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_normalize() {
        let students = vec![
            Student::new("S1", 80.0),
            Student::new("S2", 95.0).with_backlogs(1),
        ];
        assert_eq!(normalize(&students), vec![80.0, 0.0]);
    }

    #[test]
    fn test_sort_is_descending_and_stable() {
        let students = vec![
            Student::new("S1", 70.0),
            Student::new("S2", 90.0),
            Student::new("S3", 70.0),
            Student::new("S4", 99.0).with_backlogs(3),
        ];
        let sorted = sort_by_normalized(&students);
        assert_eq!(ids(&sorted), vec!["S2", "S1", "S3", "S4"]);
    }

    #[test]
    fn test_team_names() {
        assert_eq!(team_name(0), "Team A");
        assert_eq!(team_name(1), "Team B");
        assert_eq!(team_name(25), "Team Z");
        assert_eq!(team_name(26), "Team AA");
        assert_eq!(team_name(27), "Team AB");
        assert_eq!(team_name(52), "Team BA");
    }

    #[test]
    fn test_round_robin_distribution() {
        let students = cohort(&[90.0, 85.0, 80.0, 75.0, 70.0, 65.0, 60.0, 55.0]);
        let p = partition(&students, 4, "team");

        assert_eq!(p.teams.len(), 2);
        assert!(p.unassigned.is_empty());
        assert_eq!(ids(&p.teams[0].members), vec!["S1", "S3", "S5", "S7"]);
        assert_eq!(ids(&p.teams[1].members), vec!["S2", "S4", "S6", "S8"]);
        assert_eq!(p.teams[0].id, "team-1");
        assert_eq!(p.teams[1].name, "Team B");
        assert!(p.teams[1]
            .members
            .iter()
            .all(|m| m.team_id.as_deref() == Some("team-2")));
    }

    #[test]
    fn test_remainder_is_weakest() {
        let students = cohort(&[40.0, 90.0, 70.0, 80.0, 60.0]);
        let p = partition(&students, 4, "team");

        assert_eq!(p.teams.len(), 1);
        assert_eq!(p.teams[0].size(), 4);
        assert_eq!(ids(&p.unassigned), vec!["S1"]);
        assert!(p.unassigned[0].team_id.is_none());
    }

    #[test]
    fn test_backlog_students_sink_to_remainder() {
        let mut students = cohort(&[50.0, 60.0, 70.0, 80.0]);
        students.push(Student::new("S5", 99.0).with_backlogs(1));
        let p = partition(&students, 4, "team");

        assert_eq!(ids(&p.unassigned), vec!["S5"]);
        // Raw score untouched.
        assert!((p.unassigned[0].percentage - 99.0).abs() < 1e-10);
    }

    #[test]
    fn test_too_few_students() {
        let students = cohort(&[90.0, 40.0, 60.0]);
        let p = partition(&students, 4, "team");

        assert!(p.teams.is_empty());
        assert_eq!(ids(&p.unassigned), vec!["S1", "S3", "S2"]);
    }

    #[test]
    fn test_empty_and_zero_size() {
        let p = partition(&[], 4, "team");
        assert!(p.teams.is_empty());
        assert!(p.unassigned.is_empty());

        let p = partition(&cohort(&[1.0, 2.0]), 0, "team");
        assert!(p.teams.is_empty());
        assert_eq!(p.unassigned.len(), 2);
    }

    #[test]
    fn test_stale_flags_are_cleared() {
        let mut s = Student::new("S1", 10.0);
        s.team_id = Some("old".into());
        s.is_team_lead = true;
        let p = partition(&[s], 4, "team");

        assert!(p.unassigned[0].team_id.is_none());
        assert!(!p.unassigned[0].is_team_lead);
    }
}
