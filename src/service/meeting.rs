use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::db;
use crate::dto::{CreateMeetingDto, ListMeetingsQuery, MeetingResponse, UpdateMeetingDto};
use crate::errors::ApiError;
use crate::models::{Attendee, Meeting};
use crate::PGPool;

use super::auth::UserAuthData;

pub async fn create(
    user: &UserAuthData,
    dto: CreateMeetingDto,
    pool: &PGPool,
) -> Result<MeetingResponse, ApiError> {
    let meeting = Meeting {
        id: Uuid::new_v4(),
        title: dto.title,
        description: dto.description,
        start_time: dto.start_time,
        end_time: dto.end_time,
        organizer_id: user.user_id,
        canceled: false,
        color: dto.color,
        department: dto.department,
        meeting_type: dto.meeting_type,
        created_at: Utc::now(),
    };
    db::meeting::create(&meeting, pool).await?;

    // Inserted after the meeting with no surrounding transaction; if this
    // statement fails the meeting row stays behind without attendees.
    let attendees: Vec<Attendee> = dto
        .attendee_ids
        .unwrap_or_default()
        .into_iter()
        .map(|user_id| Attendee::pending(meeting.id, user_id))
        .collect();
    db::attendee::create_many(&attendees, pool).await?;

    Ok(MeetingResponse::assemble(meeting, attendees))
}

pub async fn list(
    user: &UserAuthData,
    query: &ListMeetingsQuery,
    pool: &PGPool,
) -> Result<Vec<MeetingResponse>, ApiError> {
    let meetings = db::meeting::list_by_organizer(user.user_id, query, pool).await?;
    let mut result = Vec::with_capacity(meetings.len());
    for meeting in meetings {
        let attendees = db::attendee::get_by_meeting(meeting.id, pool).await?;
        result.push(MeetingResponse::assemble(meeting, attendees));
    }
    Ok(result)
}

pub async fn update(
    meeting_id: Uuid,
    patch: UpdateMeetingDto,
    user: &UserAuthData,
    pool: &PGPool,
) -> Result<MeetingResponse, ApiError> {
    ensure_organizer(meeting_id, user, pool).await?;
    db::meeting::set_fields(meeting_id, &patch, pool).await?;

    // A present attendee list replaces the whole set, an empty one clears it.
    if let Some(attendee_ids) = patch.attendee_ids {
        db::attendee::delete_by_meeting(meeting_id, pool).await?;
        let replacements: Vec<Attendee> = attendee_ids
            .into_iter()
            .map(|user_id| Attendee::pending(meeting_id, user_id))
            .collect();
        db::attendee::create_many(&replacements, pool).await?;
    }

    read_back(meeting_id, pool).await
}

pub async fn cancel(meeting_id: Uuid, user: &UserAuthData, pool: &PGPool) -> Result<(), ApiError> {
    ensure_organizer(meeting_id, user, pool).await?;
    db::meeting::set_canceled(meeting_id, pool).await?;
    Ok(())
}

pub async fn resize(
    meeting_id: Uuid,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    user: &UserAuthData,
    pool: &PGPool,
) -> Result<MeetingResponse, ApiError> {
    ensure_organizer(meeting_id, user, pool).await?;
    db::meeting::set_times(meeting_id, start_time, end_time, pool).await?;
    read_back(meeting_id, pool).await
}

/// Mutations require the caller to be the organizer. A missing meeting and a
/// foreign one answer the same.
async fn ensure_organizer(
    meeting_id: Uuid,
    user: &UserAuthData,
    pool: &PGPool,
) -> Result<(), ApiError> {
    match db::meeting::get_organizer(meeting_id, pool).await? {
        Some(organizer_id) if organizer_id == user.user_id => Ok(()),
        _ => Err(ApiError::Forbidden),
    }
}

async fn read_back(meeting_id: Uuid, pool: &PGPool) -> Result<MeetingResponse, ApiError> {
    let meeting = db::meeting::get_by_id(meeting_id, pool).await?;
    let attendees = db::attendee::get_by_meeting(meeting_id, pool).await?;
    Ok(MeetingResponse::assemble(meeting, attendees))
}
