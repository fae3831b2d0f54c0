use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::category::CategorySchema,
    repositories::category_repository,
    state::AppState,
};

// GET /api/categories (público, dropdown)
pub async fn list_categories_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let categories = category_repository::list(&state.pool).await?;
    Ok(Json(categories))
}

// POST /api/admin/categories
pub async fn create_category_handler(
    State(state): State<AppState>,
    Json(body): Json<CategorySchema>,
) -> Result<impl IntoResponse, AppError> {
    let category = category_repository::create(&state.pool, &state.bus, body).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

// PUT /api/admin/categories/:id
pub async fn update_category_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(body): Json<CategorySchema>,
) -> Result<impl IntoResponse, AppError> {
    let category = category_repository::update(&state.pool, &state.bus, &id, body).await?;
    Ok(Json(category))
}

// DELETE /api/admin/categories/:id
pub async fn delete_category_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = category_repository::delete(&state.pool, &state.bus, &id).await?;
    Ok(Json(deleted))
}
