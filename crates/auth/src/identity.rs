use serde::{Deserialize, Serialize};

use ideaboard_core::{Entity, IdentityId};

/// The user of the current session.
///
/// Serialized as `{"id","firstName","lastName","email"}`, which is also the
/// durable slot format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: IdentityId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Identity {
    /// Build an identity with a fresh id.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: IdentityId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl Entity for Identity {
    type Id = IdentityId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
