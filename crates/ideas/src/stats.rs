//! Dashboard aggregates, derived from the idea collection on every read.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::idea::{Idea, Status};

/// Idea count per status. All three statuses are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTotals {
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl StatusTotals {
    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Todo => self.todo,
            Status::InProgress => self.in_progress,
            Status::Done => self.done,
        }
    }

    pub fn total(&self) -> usize {
        self.todo + self.in_progress + self.done
    }

    fn bump(&mut self, status: Status) {
        match status {
            Status::Todo => self.todo += 1,
            Status::InProgress => self.in_progress += 1,
            Status::Done => self.done += 1,
        }
    }
}

/// Per-person contribution counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonTotals {
    pub name: String,
    /// Ideas whose creator full name equals `name`.
    pub created: usize,
    /// Ideas listing `name` among their assignees.
    pub assigned: usize,
}

pub fn totals_by_status(ideas: &[Idea]) -> StatusTotals {
    ideas.iter().fold(StatusTotals::default(), |mut totals, idea| {
        totals.bump(idea.status());
        totals
    })
}

/// Created/assigned counts for every known or mentioned person.
///
/// Names are the reference people, then every creator and assignee seen in
/// the collection. Order: reference people as configured, then first-seen.
/// Matching is exact string equality; an idea naming the same assignee twice
/// counts once.
pub fn totals_by_user(people: &[String], ideas: &[Idea]) -> Vec<PersonTotals> {
    let mut names = NameOrder::default();
    let mut created: HashMap<String, usize> = HashMap::new();
    let mut assigned: HashMap<String, usize> = HashMap::new();

    for person in people {
        names.insert(person);
    }

    for idea in ideas {
        let creator = idea.creator_name();
        names.insert(&creator);
        *created.entry(creator).or_default() += 1;

        let mut counted: HashSet<&str> = HashSet::new();
        for assignee in idea.assignees() {
            names.insert(assignee);
            if counted.insert(assignee.as_str()) {
                *assigned.entry(assignee.clone()).or_default() += 1;
            }
        }
    }

    names
        .into_vec()
        .into_iter()
        .map(|name| PersonTotals {
            created: created.get(&name).copied().unwrap_or(0),
            assigned: assigned.get(&name).copied().unwrap_or(0),
            name,
        })
        .collect()
}

/// Insertion-ordered set of names.
#[derive(Default)]
struct NameOrder {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl NameOrder {
    fn insert(&mut self, name: &str) {
        if !self.seen.contains(name) {
            self.seen.insert(name.to_string());
            self.ordered.push(name.to_string());
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}
