/// Voice-actor handlers backed by AniList
use crate::error::{AppError, Result};
use crate::gateway::Gateway;
use crate::models::SeiyuuId;
use crate::views::{CreateFlow, CreatePostForm, VerifyRequest};
use actix_web::{web, HttpResponse};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    pub page: Option<u32>,
}

/// One roster page (voice actors only)
#[utoipa::path(
    get,
    path = "/api/v1/seiyuu",
    tag = "seiyuu",
    params(("page" = Option<u32>, Query, description = "1-based page, clamped to 1")),
    responses(
        (status = 200, description = "Roster page"),
        (status = 502, description = "AniList unavailable")
    )
)]
pub async fn roster(
    gateway: web::Data<Gateway>,
    query: web::Query<RosterQuery>,
) -> Result<HttpResponse> {
    let page = gateway
        .roster_page(query.page.unwrap_or(1))
        .await
        .map_err(|e| e.reported("Failed to load voice actors"))?;
    Ok(HttpResponse::Ok().json(page))
}

/// Live AniList profile
#[utoipa::path(
    get,
    path = "/api/v1/seiyuu/{id}",
    tag = "seiyuu",
    params(("id" = i64, Path, description = "AniList staff id")),
    responses(
        (status = 200, description = "Voice actor profile"),
        (status = 404, description = "No staff with this id")
    )
)]
pub async fn get_seiyuu(
    gateway: web::Data<Gateway>,
    id: web::Path<SeiyuuId>,
) -> Result<HttpResponse> {
    let actor = gateway
        .lookup_voice_actor(*id)
        .await
        .map_err(|e| e.reported("Failed to load seiyuu"))?
        .ok_or_else(|| AppError::NotFound("Seiyuu not found".to_string()))?;
    Ok(HttpResponse::Ok().json(actor))
}

/// Run only the id check of the create form and return the resulting state
#[utoipa::path(
    post,
    path = "/api/v1/seiyuu/verify",
    tag = "seiyuu",
    request_body = VerifyRequest,
    responses((status = 200, description = "valid with the name, or invalid with a reason"))
)]
pub async fn verify_seiyuu(
    gateway: web::Data<Gateway>,
    req: web::Json<VerifyRequest>,
) -> Result<HttpResponse> {
    let mut flow = CreateFlow::new(CreatePostForm {
        seiyuu_id: req.into_inner().seiyuu_id,
        ..Default::default()
    });
    let verification = flow.verify(&gateway).await;
    Ok(HttpResponse::Ok().json(verification))
}
