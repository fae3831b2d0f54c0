use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::AppError,
    handlers::upload::delete_uploaded_image,
    models::news::NewsSchema,
    repositories::news_repository,
    state::AppState,
};

// GET /api/admin/news: la tabla del panel: todo con relaciones resueltas
pub async fn list_news_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let news = news_repository::list_full(&state.pool).await?;
    Ok(Json(news))
}

// POST /api/admin/news
pub async fn create_news_handler(
    State(state): State<AppState>,
    Json(body): Json<NewsSchema>,
) -> Result<impl IntoResponse, AppError> {
    let news = news_repository::create(&state.pool, &state.bus, body).await?;
    Ok((StatusCode::CREATED, Json(news)))
}

// PUT /api/admin/news/:id
pub async fn update_news_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(body): Json<NewsSchema>,
) -> Result<impl IntoResponse, AppError> {
    let news = news_repository::update(&state.pool, &state.bus, &id, body).await?;
    Ok(Json(news))
}

// DELETE /api/admin/news/:id: devuelve el registro borrado, o null si el
// id no resolvió. La imagen asociada se elimina best-effort.
pub async fn delete_news_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = news_repository::delete(&state.pool, &state.bus, &id).await?;

    if let Some(image) = deleted.as_ref().and_then(|n| n.image.as_deref()) {
        delete_uploaded_image(image).await;
    }

    Ok(Json(deleted))
}
