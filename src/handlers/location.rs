use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::location::LocationSchema,
    repositories::location_repository,
    state::AppState,
};

// GET /api/locations: alimenta el dropdown del formulario de noticias y
// la tabla del panel (nombre ascendente, orden determinista)
pub async fn list_locations_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let locations = location_repository::list(&state.pool).await?;
    Ok(Json(locations))
}

// POST /api/admin/locations
pub async fn create_location_handler(
    State(state): State<AppState>,
    Json(body): Json<LocationSchema>,
) -> Result<impl IntoResponse, AppError> {
    let location = location_repository::create(&state.pool, &state.bus, body).await?;
    Ok((StatusCode::CREATED, Json(location)))
}

// PUT /api/admin/locations/:id
pub async fn update_location_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(body): Json<LocationSchema>,
) -> Result<impl IntoResponse, AppError> {
    let location = location_repository::update(&state.pool, &state.bus, &id, body).await?;
    Ok(Json(location))
}

// DELETE /api/admin/locations/:id
pub async fn delete_location_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = location_repository::delete(&state.pool, &state.bus, &id).await?;
    Ok(Json(deleted))
}
