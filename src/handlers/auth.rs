use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use garde::Validate;
use serde_json::json;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::user::{LoginPayload, RegisterPayload, User},
    state::AppState,
    utils::security::{hash_password, verify_password},
    utils::session::{create_session, lookup_session, SESSION_COOKIE},
};

// POST /api/auth/register (el primer usuario entra sin sesión y queda como
// bootstrap; después solo el personal ya autenticado puede crear cuentas)
pub async fn register_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    // Contamos usuarios existentes para decidir si es bootstrap
    let user_count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(&state.pool)
        .await?;

    if user_count > 0 && lookup_session(&state.pool, &jar).await?.is_none() {
        return Err(AppError::Unauthorized);
    }

    // Nunca guardamos la contraseña plana
    let password_hash = hash_password(&payload.password)?;

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, email, password_hash)
        VALUES ($1, $2, $3)
        RETURNING id, username, email, password_hash
        "#,
    )
    .bind(&payload.username)
    .bind(&payload.email)
    .bind(&password_hash)
    .fetch_one(&state.pool)
    .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

// POST /api/auth/login: emite el token opaco de sesión y lo deja en la
// cookie HttpOnly; el backend nunca vuelve a mirar dentro del token
pub async fn login_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    // 1. Buscar usuario por email
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, email, password_hash FROM users WHERE email = $1",
    )
    .bind(&payload.email)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::Unauthorized)?;

    // 2. Verificar contraseña (Argon2)
    if !verify_password(&payload.password, &user.password_hash) {
        return Err(AppError::Unauthorized);
    }

    // 3. Crear la sesión y dejarla en la cookie
    let token = create_session(&state.pool, user.id).await?;

    let cookie = Cookie::build((SESSION_COOKIE, token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    Ok((
        jar.add(cookie),
        Json(json!({ "message": "Inicio de sesión exitoso" })),
    ))
}

// POST /api/auth/logout: borra la sesión (best-effort) y limpia la cookie
pub async fn logout_handler(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if let Ok(token) = Uuid::parse_str(cookie.value()) {
            if let Err(e) = sqlx::query("DELETE FROM sessions WHERE token = $1")
                .bind(token)
                .execute(&state.pool)
                .await
            {
                tracing::warn!("No se pudo borrar la sesión: {:?}", e);
            }
        }
    }

    let jar = jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/").build());
    Ok((jar, Json(json!({ "message": "Sesión cerrada" }))))
}
