/// Screen payloads: one JSON view model per client route
use crate::error::{AppError, Result};
use crate::gateway::Gateway;
use crate::models::SortOrder;
use crate::router::Route;
use crate::views::{CreateView, HomeView, PostDetailView, RosterView, SeiyuuView};
use actix_web::{web, HttpResponse};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ScreenQuery {
    pub sort: Option<String>,
    pub q: Option<String>,
    pub page: Option<u32>,
}

/// `GET /api/v1/screens/{path}` where `path` is the client route without its leading slash
#[utoipa::path(
    get,
    path = "/api/v1/screens/{path}",
    tag = "screens",
    params(
        ("path" = String, Path, description = "Client route without the leading slash"),
        ("sort" = Option<String>, Query, description = "Home ordering"),
        ("q" = Option<String>, Query, description = "Home search text"),
        ("page" = Option<u32>, Query, description = "Roster page")
    ),
    responses(
        (status = 200, description = "{route, screen, view} payload"),
        (status = 404, description = "No screen at this route")
    )
)]
pub async fn render_screen(
    gateway: web::Data<Gateway>,
    path: web::Path<String>,
    query: web::Query<ScreenQuery>,
) -> Result<HttpResponse> {
    let client_path = format!("/{}", path.into_inner());
    let route = Route::parse(&client_path)
        .ok_or_else(|| AppError::NotFound(format!("No screen at {}", client_path)))?;

    tracing::debug!(route = ?route, "Rendering screen");

    let body = match route {
        Route::Home => serde_json::to_value(
            HomeView::load(
                &gateway,
                SortOrder::parse(query.sort.as_deref()),
                query.q.as_deref(),
            )
            .await?,
        ),
        Route::Create => serde_json::to_value(CreateView::default()),
        Route::SeiyuuList => {
            serde_json::to_value(RosterView::load(&gateway, query.page.unwrap_or(1)).await?)
        }
        Route::Seiyuu(id) => serde_json::to_value(SeiyuuView::load(&gateway, id).await?),
        Route::Post(id) => serde_json::to_value(PostDetailView::load(&gateway, id).await?),
    }
    .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "route": route.path(),
        "screen": route.name(),
        "view": body,
    })))
}
