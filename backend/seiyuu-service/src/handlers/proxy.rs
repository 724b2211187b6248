/// Development pass-through to the AniList GraphQL endpoint
use crate::error::Result;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use anilist_client::AniListClient;

/// Forward the request body verbatim and relay the upstream status and body.
pub async fn anilist_proxy(
    client: web::Data<AniListClient>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    tracing::debug!(upstream = client.endpoint(), bytes = body.len(), "Proxying AniList request");

    let (status, payload) = client.forward(body.to_vec()).await?;
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);

    Ok(HttpResponse::build(status)
        .content_type("application/json")
        .body(payload))
}
