use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Attendee, Meeting};

#[derive(Debug, Deserialize, Clone)]
pub struct CreateMeetingDto {
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub color: Option<String>,
    pub department: Option<String>,
    pub meeting_type: Option<String>,
    pub attendee_ids: Option<Vec<Uuid>>,
}

/// Partial update: absent field = unchanged. `attendee_ids` is not a column
/// patch — when present (even empty) it replaces the whole attendee set.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct UpdateMeetingDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub color: Option<String>,
    pub department: Option<String>,
    pub meeting_type: Option<String>,
    pub canceled: Option<bool>,
    pub attendee_ids: Option<Vec<Uuid>>,
}

impl UpdateMeetingDto {
    /// Whether the patch touches any meetings column (attendee_ids excluded).
    pub fn has_updates(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.start_time.is_some()
            || self.end_time.is_some()
            || self.color.is_some()
            || self.department.is_some()
            || self.meeting_type.is_some()
            || self.canceled.is_some()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResizeQuery {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ListMeetingsQuery {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub include_canceled: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: Uuid,
    pub exp: usize,
}

impl Claims {
    pub fn new(user_id: &Uuid, exp: usize) -> Self {
        Self { user_id: *user_id, exp }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AttendeeResponse {
    pub user_id: Uuid,
    pub status: String,
}

/// Client-facing meeting record. Field names are the API's, not the store's:
/// `start`/`end`/`creator` alias the time and organizer columns and
/// `meetingType` is the camel-cased type column.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MeetingResponse {
    pub id: Uuid,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub color: Option<String>,
    pub department: Option<String>,
    #[serde(rename = "meetingType")]
    pub meeting_type: Option<String>,
    pub creator: Uuid,
    pub attendees: Vec<AttendeeResponse>,
    pub canceled: bool,
    pub description: Option<String>,
}

impl MeetingResponse {
    pub fn assemble(meeting: Meeting, attendees: Vec<Attendee>) -> Self {
        Self {
            id: meeting.id,
            title: meeting.title,
            start: meeting.start_time,
            end: meeting.end_time,
            color: meeting.color,
            department: meeting.department,
            meeting_type: meeting.meeting_type,
            creator: meeting.organizer_id,
            attendees: attendees
                .into_iter()
                .map(|a| AttendeeResponse {
                    user_id: a.user_id,
                    status: a.status,
                })
                .collect(),
            canceled: meeting.canceled,
            description: meeting.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfirmationResponse {
    pub message: String,
}
