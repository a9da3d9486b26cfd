//! End-to-end meeting lifecycle properties against a real Postgres instance.
//!
//! These tests need a scratch database and are ignored by default:
//!
//!     DATABASE_URL=postgres://localhost/meetings_test cargo test -- --ignored
//!
//! Each test creates its own organizer id, so listings stay isolated even
//! when the database is shared between runs.

use chrono::{TimeZone, Utc};
use meeting_scheduler_service::db::{init_db_pool, MIGRATOR};
use meeting_scheduler_service::dto::{CreateMeetingDto, ListMeetingsQuery, UpdateMeetingDto};
use meeting_scheduler_service::errors::ApiError;
use meeting_scheduler_service::service::auth::UserAuthData;
use meeting_scheduler_service::service::meeting;
use meeting_scheduler_service::PGPool;
use uuid::Uuid;

async fn setup_pool() -> PGPool {
    dotenv::dotenv().ok();
    let db_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must point at a scratch database");
    let pool = init_db_pool(&db_url).await;
    MIGRATOR.run(&pool).await.expect("Failed to run migrations");
    pool
}

fn fresh_user() -> UserAuthData {
    UserAuthData {
        user_id: Uuid::new_v4(),
    }
}

fn standup(attendee_ids: Option<Vec<Uuid>>) -> CreateMeetingDto {
    CreateMeetingDto {
        title: "Standup".to_string(),
        description: None,
        start_time: Utc.with_ymd_and_hms(2026, 8, 10, 9, 0, 0).unwrap(),
        end_time: Utc.with_ymd_and_hms(2026, 8, 10, 9, 15, 0).unwrap(),
        color: Some("#3788d8".to_string()),
        department: None,
        meeting_type: Some("sync".to_string()),
        attendee_ids,
    }
}

fn include_all() -> ListMeetingsQuery {
    ListMeetingsQuery {
        start_date: None,
        end_date: None,
        include_canceled: true,
    }
}

#[actix_rt::test]
#[ignore = "requires a Postgres instance via DATABASE_URL"]
async fn create_then_list_includes_pending_attendees() {
    let pool = setup_pool().await;
    let organizer = fresh_user();
    let attendee_ids = vec![Uuid::new_v4(), Uuid::new_v4()];

    let created = meeting::create(&organizer, standup(Some(attendee_ids.clone())), &pool)
        .await
        .unwrap();
    assert_eq!(created.attendees.len(), 2);
    assert!(created.attendees.iter().all(|a| a.status == "pending"));

    let listed = meeting::list(&organizer, &include_all(), &pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    let mut got: Vec<Uuid> = listed[0].attendees.iter().map(|a| a.user_id).collect();
    got.sort();
    let mut want = attendee_ids;
    want.sort();
    assert_eq!(got, want);
}

#[actix_rt::test]
#[ignore = "requires a Postgres instance via DATABASE_URL"]
async fn update_title_only_preserves_other_fields() {
    let pool = setup_pool().await;
    let organizer = fresh_user();
    let created = meeting::create(&organizer, standup(None), &pool).await.unwrap();

    let patch = UpdateMeetingDto {
        title: Some("Renamed".to_string()),
        ..Default::default()
    };
    let updated = meeting::update(created.id, patch, &organizer, &pool)
        .await
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.start, created.start);
    assert_eq!(updated.end, created.end);
    assert_eq!(updated.color, created.color);
    assert_eq!(updated.department, created.department);
    assert_eq!(updated.meeting_type, created.meeting_type);
    assert_eq!(updated.creator, organizer.user_id);
    assert!(!updated.canceled);
}

#[actix_rt::test]
#[ignore = "requires a Postgres instance via DATABASE_URL"]
async fn update_with_empty_attendees_clears_the_set() {
    let pool = setup_pool().await;
    let organizer = fresh_user();
    let created = meeting::create(&organizer, standup(Some(vec![Uuid::new_v4()])), &pool)
        .await
        .unwrap();
    assert_eq!(created.attendees.len(), 1);

    let patch = UpdateMeetingDto {
        attendee_ids: Some(vec![]),
        ..Default::default()
    };
    let updated = meeting::update(created.id, patch, &organizer, &pool)
        .await
        .unwrap();
    assert!(updated.attendees.is_empty());
}

#[actix_rt::test]
#[ignore = "requires a Postgres instance via DATABASE_URL"]
async fn update_replaces_attendee_set_wholesale() {
    let pool = setup_pool().await;
    let organizer = fresh_user();
    let created = meeting::create(
        &organizer,
        standup(Some(vec![Uuid::new_v4(), Uuid::new_v4()])),
        &pool,
    )
    .await
    .unwrap();

    let replacement = Uuid::new_v4();
    let patch = UpdateMeetingDto {
        attendee_ids: Some(vec![replacement]),
        ..Default::default()
    };
    let updated = meeting::update(created.id, patch, &organizer, &pool)
        .await
        .unwrap();
    assert_eq!(updated.attendees.len(), 1);
    assert_eq!(updated.attendees[0].user_id, replacement);
    assert_eq!(updated.attendees[0].status, "pending");
}

#[actix_rt::test]
#[ignore = "requires a Postgres instance via DATABASE_URL"]
async fn foreign_caller_is_forbidden_from_all_mutations() {
    let pool = setup_pool().await;
    let organizer = fresh_user();
    let intruder = fresh_user();
    let created = meeting::create(&organizer, standup(None), &pool).await.unwrap();

    let patch = UpdateMeetingDto {
        title: Some("Hijacked".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        meeting::update(created.id, patch, &intruder, &pool).await,
        Err(ApiError::Forbidden)
    ));
    assert!(matches!(
        meeting::cancel(created.id, &intruder, &pool).await,
        Err(ApiError::Forbidden)
    ));
    assert!(matches!(
        meeting::resize(created.id, created.start, created.end, &intruder, &pool).await,
        Err(ApiError::Forbidden)
    ));

    // a meeting that does not exist answers the same
    assert!(matches!(
        meeting::cancel(Uuid::new_v4(), &intruder, &pool).await,
        Err(ApiError::Forbidden)
    ));
}

#[actix_rt::test]
#[ignore = "requires a Postgres instance via DATABASE_URL"]
async fn cancel_is_a_soft_delete() {
    let pool = setup_pool().await;
    let organizer = fresh_user();
    let created = meeting::create(&organizer, standup(None), &pool).await.unwrap();

    meeting::cancel(created.id, &organizer, &pool).await.unwrap();

    let visible = meeting::list(
        &organizer,
        &ListMeetingsQuery {
            start_date: None,
            end_date: None,
            include_canceled: false,
        },
        &pool,
    )
    .await
    .unwrap();
    assert!(visible.is_empty());

    let all = meeting::list(&organizer, &include_all(), &pool).await.unwrap();
    assert_eq!(all.len(), 1);
    assert!(all[0].canceled);
}

#[actix_rt::test]
#[ignore = "requires a Postgres instance via DATABASE_URL"]
async fn resize_touches_only_the_time_range() {
    let pool = setup_pool().await;
    let organizer = fresh_user();
    let created = meeting::create(
        &organizer,
        standup(Some(vec![Uuid::new_v4(), Uuid::new_v4()])),
        &pool,
    )
    .await
    .unwrap();

    let new_start = Utc.with_ymd_and_hms(2026, 8, 10, 9, 5, 0).unwrap();
    let new_end = Utc.with_ymd_and_hms(2026, 8, 10, 9, 20, 0).unwrap();
    let resized = meeting::resize(created.id, new_start, new_end, &organizer, &pool)
        .await
        .unwrap();

    assert_eq!(resized.start, new_start);
    assert_eq!(resized.end, new_end);
    assert_eq!(resized.title, "Standup");
    assert_eq!(resized.color, created.color);
    assert_eq!(resized.attendees.len(), 2);
    assert!(resized.attendees.iter().all(|a| a.status == "pending"));
}

#[actix_rt::test]
#[ignore = "requires a Postgres instance via DATABASE_URL"]
async fn list_respects_date_window() {
    let pool = setup_pool().await;
    let organizer = fresh_user();

    let in_window = meeting::create(&organizer, standup(None), &pool).await.unwrap();
    let mut later = standup(None);
    later.title = "Planning".to_string();
    later.start_time = Utc.with_ymd_and_hms(2026, 9, 10, 9, 0, 0).unwrap();
    later.end_time = Utc.with_ymd_and_hms(2026, 9, 10, 10, 0, 0).unwrap();
    meeting::create(&organizer, later, &pool).await.unwrap();

    let query = ListMeetingsQuery {
        start_date: Some(Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap()),
        end_date: Some(Utc.with_ymd_and_hms(2026, 8, 31, 0, 0, 0).unwrap()),
        include_canceled: true,
    };
    let listed = meeting::list(&organizer, &query, &pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, in_window.id);
}
