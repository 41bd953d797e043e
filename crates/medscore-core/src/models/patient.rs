use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// The clinical record that owns responses and advice. Linked one-to-one to
/// an authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attending_doctor_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl Patient {
    /// A bare record for a user seen for the first time.
    pub fn provision(user_id: Uuid) -> Self {
        let now = jiff::Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            gender: None,
            diagnosis: None,
            attending_doctor_id: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }
}
