//! Dashboard view: the aggregates the home page charts.

use serde::{Deserialize, Serialize};

use ideaboard_auth::Identity;
use ideaboard_ideas::{IdeaRegistry, PersonTotals, Status, StatusTotals};

/// One slice of the status pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSlice {
    pub status: Status,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Registry version the figures were computed from.
    pub version: u64,
    pub user: Option<Identity>,
    pub totals_by_status: StatusTotals,
    pub status_breakdown: Vec<StatusSlice>,
    pub totals_by_user: Vec<PersonTotals>,
}

impl Dashboard {
    pub fn build(registry: &IdeaRegistry, user: Option<&Identity>) -> Self {
        let totals = registry.totals_by_status();
        let status_breakdown = Status::ALL
            .iter()
            .map(|status| StatusSlice {
                status: *status,
                label: status.label().to_string(),
                count: totals.get(*status),
            })
            .collect();

        Self {
            version: registry.version(),
            user: user.cloned(),
            totals_by_status: totals,
            status_breakdown,
            totals_by_user: registry.totals_by_user(),
        }
    }
}
