use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ideaboard_core::{DomainError, DomainResult, Entity, IdeaId};

/// Workflow status of an idea.
///
/// Closed set with no transition guards: any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl Status {
    /// Every status, in dashboard order.
    pub const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in_progress",
            Status::Done => "done",
        }
    }

    /// Human-readable label for badges and charts.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Todo => "To do",
            Status::InProgress => "In progress",
            Status::Done => "Done",
        }
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Status::Todo),
            "in_progress" => Ok(Status::InProgress),
            "done" => Ok(Status::Done),
            other => Err(DomainError::validation(
                "status",
                format!("unknown status `{other}`"),
            )),
        }
    }
}

/// Everything about an idea except its id.
///
/// This is what the create/edit form submits. The registry stores it as-is;
/// [`IdeaDraft::validate`] is for the form boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaDraft {
    pub title: String,
    pub description: String,
    pub creator_first_name: String,
    pub creator_last_name: String,
    pub start_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub status: Status,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub assignees: Vec<String>,
}

const MIN_TITLE_CHARS: usize = 2;
const MIN_DESCRIPTION_CHARS: usize = 4;

impl IdeaDraft {
    /// Creator full name as shown in lists and counted in per-person totals.
    pub fn creator_name(&self) -> String {
        format!("{} {}", self.creator_first_name, self.creator_last_name)
            .trim()
            .to_string()
    }

    /// Form-boundary checks. Dates are not compared with each other.
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.trim().chars().count() < MIN_TITLE_CHARS {
            return Err(DomainError::validation(
                "title",
                format!("must be at least {MIN_TITLE_CHARS} characters"),
            ));
        }
        if self.description.trim().chars().count() < MIN_DESCRIPTION_CHARS {
            return Err(DomainError::validation(
                "description",
                format!("must be at least {MIN_DESCRIPTION_CHARS} characters"),
            ));
        }
        if self.creator_first_name.trim().is_empty() {
            return Err(DomainError::validation("creatorFirstName", "required"));
        }
        if self.creator_last_name.trim().is_empty() {
            return Err(DomainError::validation("creatorLastName", "required"));
        }
        Ok(())
    }
}

/// A stored idea: a registry-assigned id plus the submitted draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub id: IdeaId,
    #[serde(flatten)]
    pub details: IdeaDraft,
}

impl Idea {
    pub fn new(id: IdeaId, details: IdeaDraft) -> Self {
        Self { id, details }
    }

    pub fn title(&self) -> &str {
        &self.details.title
    }

    pub fn status(&self) -> Status {
        self.details.status
    }

    pub fn creator_name(&self) -> String {
        self.details.creator_name()
    }

    pub fn assignees(&self) -> &[String] {
        &self.details.assignees
    }

    pub fn groups(&self) -> &[String] {
        &self.details.groups
    }
}

impl Entity for Idea {
    type Id = IdeaId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
