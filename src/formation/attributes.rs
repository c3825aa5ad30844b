//! Derived team attributes.
//!
//! Once membership is final, each team gets a leader, a dominant domain,
//! a project title and its true average. Ties are broken explicitly so
//! the result never depends on map iteration order:
//!
//! - leader: highest raw percentage, then lowest student ID;
//! - domain: highest member count, then lexicographically smallest label.

use std::collections::{BTreeMap, HashMap};

use crate::models::{Student, Team};

/// Position of the member that should lead the team.
///
/// Prefers members without backlogs; falls back to all members when
/// everyone has backlogs. Returns `None` for an empty team.
pub fn select_leader(members: &[Student]) -> Option<usize> {
    let eligible: Vec<usize> = (0..members.len())
        .filter(|&i| !members[i].has_backlogs())
        .collect();
    let candidates = if eligible.is_empty() {
        (0..members.len()).collect()
    } else {
        eligible
    };

    candidates.into_iter().max_by(|&a, &b| {
        members[a]
            .percentage
            .total_cmp(&members[b].percentage)
            .then_with(|| members[b].id.cmp(&members[a].id))
    })
}

/// Most common member domain. Returns `None` for an empty team.
pub fn dominant_domain(members: &[Student]) -> Option<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for m in members {
        *counts.entry(m.domain.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(domain, _)| domain.to_string())
}

/// Project title for the team at zero-based `index`.
///
/// The first `-` in the domain becomes a space and every word is
/// capitalized: `("web-development", 0) → "Web Development Project 1"`.
pub fn project_title(domain: &str, index: usize) -> String {
    let spaced = domain.replacen('-', " ", 1);
    let mut title = String::with_capacity(spaced.len());
    let mut prev_is_word = false;
    for c in spaced.chars() {
        let is_word = c.is_ascii_alphanumeric() || c == '_';
        if is_word && !prev_is_word {
            title.push(c.to_ascii_uppercase());
        } else {
            title.push(c);
        }
        prev_is_word = is_word;
    }
    format!("{title} Project {}", index + 1)
}

/// Mean raw percentage of `members`, looked up by ID in `pool`.
///
/// Members missing from the pool contribute their own raw percentage.
pub fn true_average(members: &[Student], pool: &HashMap<&str, &Student>) -> f64 {
    if members.is_empty() {
        return 0.0;
    }
    let total: f64 = members
        .iter()
        .map(|m| pool.get(m.id.as_str()).map_or(m.percentage, |s| s.percentage))
        .sum();
    total / members.len() as f64
}

/// Fills leader, domain, title and true average on every team.
///
/// `pool` is the original input cohort. If it repeats an ID, the first
/// record with that ID supplies the raw percentage.
pub fn assign_attributes(teams: &mut [Team], pool: &[Student]) {
    let mut by_id: HashMap<&str, &Student> = HashMap::with_capacity(pool.len());
    for s in pool {
        // First record wins for a duplicated ID.
        by_id.entry(s.id.as_str()).or_insert(s);
    }

    for (index, team) in teams.iter_mut().enumerate() {
        for m in &mut team.members {
            m.is_team_lead = false;
        }
        team.team_lead_id = select_leader(&team.members).map(|pos| {
            let lead = &mut team.members[pos];
            lead.is_team_lead = true;
            lead.id.clone()
        });

        team.domain = dominant_domain(&team.members).unwrap_or_default();
        team.project_title = project_title(&team.domain, index);
        team.average_percentage = true_average(&team.members, &by_id);
    }
}
