use chrono::{DateTime, Utc};
use sqlx::{postgres::PgQueryResult, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::{ListMeetingsQuery, UpdateMeetingDto};
use crate::models::Meeting;
use crate::PGPool;

pub async fn create(meeting: &Meeting, pool: &PGPool) -> Result<PgQueryResult, sqlx::Error> {
    sqlx::query(
        "INSERT INTO meetings (id, title, description, start_time, end_time, organizer_id, canceled, color, department, meeting_type, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
    )
    .bind(meeting.id)
    .bind(&meeting.title)
    .bind(&meeting.description)
    .bind(meeting.start_time)
    .bind(meeting.end_time)
    .bind(meeting.organizer_id)
    .bind(meeting.canceled)
    .bind(&meeting.color)
    .bind(&meeting.department)
    .bind(&meeting.meeting_type)
    .bind(meeting.created_at)
    .execute(pool)
    .await
}

pub async fn get_by_id(id: Uuid, pool: &PGPool) -> Result<Meeting, sqlx::Error> {
    sqlx::query_as::<_, Meeting>("SELECT * FROM meetings WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
}

/// Organizer of the meeting, or `None` when no such row exists. The
/// ownership check reads only this column.
pub async fn get_organizer(id: Uuid, pool: &PGPool) -> Result<Option<Uuid>, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>("SELECT organizer_id FROM meetings WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_by_organizer(
    organizer_id: Uuid,
    query: &ListMeetingsQuery,
    pool: &PGPool,
) -> Result<Vec<Meeting>, sqlx::Error> {
    let mut query_builder: QueryBuilder<Postgres> =
        QueryBuilder::new("SELECT * FROM meetings WHERE organizer_id = ");
    query_builder.push_bind(organizer_id);
    if let Some(start_date) = query.start_date {
        query_builder.push(" AND start_time >= ");
        query_builder.push_bind(start_date);
    }
    if let Some(end_date) = query.end_date {
        query_builder.push(" AND end_time <= ");
        query_builder.push_bind(end_date);
    }
    if !query.include_canceled {
        query_builder.push(" AND canceled = FALSE");
    }
    query_builder
        .build_query_as::<Meeting>()
        .fetch_all(pool)
        .await
}

/// Applies only the columns present in the patch. A patch with no column
/// changes is a no-op returning 0.
pub async fn set_fields(
    id: Uuid,
    patch: &UpdateMeetingDto,
    pool: &PGPool,
) -> Result<u64, sqlx::Error> {
    if !patch.has_updates() {
        return Ok(0);
    }
    let mut query_builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE meetings SET ");
    let mut separated = query_builder.separated(", ");
    if let Some(v) = &patch.title {
        separated.push("title = ");
        separated.push_bind_unseparated(v);
    }
    if let Some(v) = &patch.description {
        separated.push("description = ");
        separated.push_bind_unseparated(v);
    }
    if let Some(v) = patch.start_time {
        separated.push("start_time = ");
        separated.push_bind_unseparated(v);
    }
    if let Some(v) = patch.end_time {
        separated.push("end_time = ");
        separated.push_bind_unseparated(v);
    }
    if let Some(v) = &patch.color {
        separated.push("color = ");
        separated.push_bind_unseparated(v);
    }
    if let Some(v) = &patch.department {
        separated.push("department = ");
        separated.push_bind_unseparated(v);
    }
    if let Some(v) = &patch.meeting_type {
        separated.push("meeting_type = ");
        separated.push_bind_unseparated(v);
    }
    if let Some(v) = patch.canceled {
        separated.push("canceled = ");
        separated.push_bind_unseparated(v);
    }
    query_builder.push(" WHERE id = ");
    query_builder.push_bind(id);

    let res = query_builder.build().execute(pool).await?;
    Ok(res.rows_affected())
}

pub async fn set_canceled(id: Uuid, pool: &PGPool) -> Result<u64, sqlx::Error> {
    let res = sqlx::query("UPDATE meetings SET canceled = TRUE WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

pub async fn set_times(
    id: Uuid,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    pool: &PGPool,
) -> Result<u64, sqlx::Error> {
    let res = sqlx::query("UPDATE meetings SET start_time = $1, end_time = $2 WHERE id = $3")
        .bind(start_time)
        .bind(end_time)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
