use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{error::AppError, repositories::news_repository, state::AppState, views};

#[derive(Debug, Deserialize)]
pub struct PageParams {
    // Llega como texto crudo: "?page=abc" cuenta como página 1, no como 400
    pub page: Option<String>,
}

// GET /api/home: carrusel + franja de últimas + grid por ubicación
pub async fn home_feed_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let feed = views::home_feed(&state.pool).await?;
    Ok(Json(feed))
}

// GET /api/news/public: las 50 más recientes con relaciones
pub async fn public_feed_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let news =
        news_repository::get_public_feed(&state.pool, news_repository::PUBLIC_FEED_LIMIT).await?;
    Ok(Json(news))
}

// GET /api/news/special: la barra lateral de destacadas
pub async fn special_news_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let news = views::sidebar_feed(&state.pool).await?;
    Ok(Json(news))
}

// GET /api/news/:id: detalle con relacionadas
pub async fn article_detail_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let detail = views::article_detail(&state.pool, &id).await?;
    Ok(Json(detail))
}

// GET /api/locations/:name/news?page=N: feed paginado de una ubicación
pub async fn location_feed_handler(
    Path(name): Path<String>,
    Query(params): Query<PageParams>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let feed = views::location_feed(&state.pool, &name, params.page).await?;
    Ok(Json(feed))
}
