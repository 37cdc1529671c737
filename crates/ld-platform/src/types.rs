//! Run metadata records.

use core::fmt;

use chrono::{DateTime, Utc};
use ld_core::{CoreResult, RecipeVersion, RunLocator};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a run as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    Created,
    Scheduled,
    Queued,
    Running,
    Succeeded,
    Failed,
    Cancelled,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RunStatus::Created => "Created",
            RunStatus::Scheduled => "Scheduled",
            RunStatus::Queued => "Queued",
            RunStatus::Running => "Running",
            RunStatus::Succeeded => "Succeeded",
            RunStatus::Failed => "Failed",
            RunStatus::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

/// The named, versioned simulation definition a run was executed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub owner: String,
    pub name: String,
    pub tag: String,
}

impl Recipe {
    /// `owner/name`, the identity compared by the validation gate.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    pub fn version(&self) -> CoreResult<RecipeVersion> {
        self.tag.parse()
    }
}

/// Immutable snapshot of one run's identity and state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunDetails {
    pub locator: RunLocator,
    pub status: RunStatus,
    pub recipe: Recipe,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_as_platform_labels() {
        let json = serde_json::to_string(&RunStatus::Succeeded).unwrap();
        assert_eq!(json, "\"Succeeded\"");
        let back: RunStatus = serde_json::from_str("\"Failed\"").unwrap();
        assert_eq!(back, RunStatus::Failed);
    }

    #[test]
    fn recipe_full_name_joins_owner_and_name() {
        let recipe = Recipe {
            owner: "pollination".to_string(),
            name: "leed-daylight-option-two".to_string(),
            tag: "0.3.4".to_string(),
        };
        assert_eq!(recipe.full_name(), "pollination/leed-daylight-option-two");
        assert_eq!(recipe.version().unwrap().to_string(), "0.3.4");
    }
}
