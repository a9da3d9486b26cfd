use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use crate::models::Attendee;
use crate::PGPool;

/// Bulk insert as a single statement. Empty input is a no-op.
pub async fn create_many(attendees: &[Attendee], pool: &PGPool) -> Result<u64, sqlx::Error> {
    if attendees.is_empty() {
        return Ok(0);
    }
    let mut query_builder: QueryBuilder<Postgres> = QueryBuilder::new(
        "INSERT INTO attendees (id, meeting_id, user_id, status, created_at) ",
    );
    query_builder.push_values(attendees.iter(), |mut b, attendee| {
        b.push_bind(attendee.id)
            .push_bind(attendee.meeting_id)
            .push_bind(attendee.user_id)
            .push_bind(&attendee.status)
            .push_bind(attendee.created_at);
    });
    let res = query_builder.build().execute(pool).await?;
    Ok(res.rows_affected())
}

pub async fn get_by_meeting(meeting_id: Uuid, pool: &PGPool) -> Result<Vec<Attendee>, sqlx::Error> {
    sqlx::query_as::<_, Attendee>("SELECT * FROM attendees WHERE meeting_id = $1")
        .bind(meeting_id)
        .fetch_all(pool)
        .await
}

pub async fn delete_by_meeting(meeting_id: Uuid, pool: &PGPool) -> Result<u64, sqlx::Error> {
    let res = sqlx::query("DELETE FROM attendees WHERE meeting_id = $1")
        .bind(meeting_id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
