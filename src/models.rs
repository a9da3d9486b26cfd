use chrono::{DateTime, Utc};
use sqlx::prelude::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, serde::Serialize, serde::Deserialize)]
pub struct Meeting {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub organizer_id: Uuid,
    pub canceled: bool,
    pub color: Option<String>,
    pub department: Option<String>,
    pub meeting_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, serde::Serialize, serde::Deserialize)]
pub struct Attendee {
    pub id: Uuid,
    pub meeting_id: Uuid,
    pub user_id: Uuid,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Attendee {
    /// Fresh membership row for a meeting, in the initial "pending" state.
    pub fn pending(meeting_id: Uuid, user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            meeting_id,
            user_id,
            status: "pending".to_string(),
            created_at: Utc::now(),
        }
    }
}
