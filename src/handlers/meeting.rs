use actix_web::{delete, get, patch, post, put, web, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::dto::{
    ConfirmationResponse, CreateMeetingDto, ListMeetingsQuery, ResizeQuery, UpdateMeetingDto,
};
use crate::errors::ApiError;
use crate::service::{self, auth::authed_user};
use crate::PGPool;

/// Liveness root, outside the authenticated scope.
#[get("/")]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(ConfirmationResponse {
        message: "Meeting Scheduler Backend".to_string(),
    })
}

#[post("/create")]
pub async fn create(
    req: HttpRequest,
    dto: web::Json<CreateMeetingDto>,
    pool_state: web::Data<PGPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &PGPool = pool_state.get_ref();
    let user = authed_user(&req)?;
    let meeting = service::meeting::create(&user, dto.into_inner(), conn).await?;
    Ok(HttpResponse::Created().json(meeting))
}

#[get("/")]
pub async fn list(
    req: HttpRequest,
    query: web::Query<ListMeetingsQuery>,
    pool_state: web::Data<PGPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &PGPool = pool_state.get_ref();
    let user = authed_user(&req)?;
    let meetings = service::meeting::list(&user, &query.into_inner(), conn).await?;
    Ok(HttpResponse::Ok().json(meetings))
}

#[put("/{meeting_id}")]
pub async fn update(
    req: HttpRequest,
    meeting_id: web::Path<Uuid>,
    patch: web::Json<UpdateMeetingDto>,
    pool_state: web::Data<PGPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &PGPool = pool_state.get_ref();
    let user = authed_user(&req)?;
    let meeting =
        service::meeting::update(meeting_id.into_inner(), patch.into_inner(), &user, conn).await?;
    Ok(HttpResponse::Ok().json(meeting))
}

#[delete("/{meeting_id}")]
pub async fn cancel(
    req: HttpRequest,
    meeting_id: web::Path<Uuid>,
    pool_state: web::Data<PGPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &PGPool = pool_state.get_ref();
    let user = authed_user(&req)?;
    service::meeting::cancel(meeting_id.into_inner(), &user, conn).await?;
    Ok(HttpResponse::Ok().json(ConfirmationResponse {
        message: "Meeting canceled".to_string(),
    }))
}

#[patch("/{meeting_id}/resize")]
pub async fn resize(
    req: HttpRequest,
    meeting_id: web::Path<Uuid>,
    query: web::Query<ResizeQuery>,
    pool_state: web::Data<PGPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &PGPool = pool_state.get_ref();
    let user = authed_user(&req)?;
    let ResizeQuery {
        start_time,
        end_time,
    } = query.into_inner();
    let meeting =
        service::meeting::resize(meeting_id.into_inner(), start_time, end_time, &user, conn)
            .await?;
    Ok(HttpResponse::Ok().json(meeting))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create);
    cfg.service(list);
    cfg.service(update);
    cfg.service(cancel);
    cfg.service(resize);
}
