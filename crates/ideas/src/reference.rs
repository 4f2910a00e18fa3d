//! Reference lists and starter content.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::idea::{IdeaDraft, Status};

pub const DEFAULT_PEOPLE: [&str; 4] = ["Alice Martin", "Bob Durand", "Charlie Dupont", "Diane Leroy"];
pub const DEFAULT_GROUPS: [&str; 4] = ["Product", "Design", "Development", "Marketing"];

/// Fixed suggestion lists for the assignment pickers.
///
/// Not foreign keys: ideas may name people or groups missing from here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceLists {
    people: Vec<String>,
    groups: Vec<String>,
}

impl ReferenceLists {
    pub fn new(people: Vec<String>, groups: Vec<String>) -> Self {
        Self { people, groups }
    }

    pub fn people(&self) -> &[String] {
        &self.people
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }
}

impl Default for ReferenceLists {
    fn default() -> Self {
        Self {
            people: DEFAULT_PEOPLE.iter().map(|p| p.to_string()).collect(),
            groups: DEFAULT_GROUPS.iter().map(|g| g.to_string()).collect(),
        }
    }
}

/// Three sample ideas, one per status, dated relative to `now`.
pub fn sample_ideas(now: DateTime<Utc>) -> Vec<IdeaDraft> {
    vec![
        IdeaDraft {
            title: "Homepage redesign".to_string(),
            description: "Improve the hero, calls to action and key sections.".to_string(),
            creator_first_name: "Alice".to_string(),
            creator_last_name: "Martin".to_string(),
            start_date: now,
            due_date: now + Duration::days(10),
            status: Status::InProgress,
            groups: vec!["Design".to_string(), "Product".to_string()],
            assignees: vec!["Bob Durand".to_string()],
        },
        IdeaDraft {
            title: "Onboarding MVP".to_string(),
            description: "Simplified sign-up flow.".to_string(),
            creator_first_name: "Bob".to_string(),
            creator_last_name: "Durand".to_string(),
            start_date: now,
            due_date: now + Duration::days(20),
            status: Status::Todo,
            groups: vec!["Development".to_string()],
            assignees: vec!["Charlie Dupont".to_string(), "Diane Leroy".to_string()],
        },
        IdeaDraft {
            title: "Q3 email campaign".to_string(),
            description: "Segment the audience and prepare three newsletters.".to_string(),
            creator_first_name: "Diane".to_string(),
            creator_last_name: "Leroy".to_string(),
            start_date: now,
            due_date: now + Duration::days(5),
            status: Status::Done,
            groups: vec!["Marketing".to_string()],
            assignees: vec![],
        },
    ]
}
