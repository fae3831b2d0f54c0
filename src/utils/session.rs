use axum::{
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::{db::DbPool, models::user::CurrentUser, state::AppState};

// El gate de administración es la PRESENCIA de este token en la cookie;
// el contenido es opaco (un UUID que solo sirve para buscar la sesión)
pub const SESSION_COOKIE: &str = "session_token";
pub const SESSION_HOURS: i64 = 24;

// Resuelve la cookie a un usuario: None si no hay cookie, el token no
// parsea, la sesión no existe o ya expiró
pub async fn lookup_session(
    pool: &DbPool,
    jar: &CookieJar,
) -> Result<Option<CurrentUser>, sqlx::Error> {
    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return Ok(None);
    };
    let Ok(token) = Uuid::parse_str(cookie.value()) else {
        return Ok(None);
    };

    sqlx::query_as::<_, CurrentUser>(
        r#"
        SELECT u.id, u.username, u.email
        FROM sessions s
        INNER JOIN users u ON u.id = s.user_id
        WHERE s.token = $1 AND s.expires_at > NOW()
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await
}

pub async fn create_session(pool: &DbPool, user_id: Uuid) -> Result<Uuid, sqlx::Error> {
    let token = Uuid::new_v4();
    let expires_at = Utc::now() + Duration::hours(SESSION_HOURS);

    sqlx::query("INSERT INTO sessions (token, user_id, expires_at) VALUES ($1, $2, $3)")
        .bind(token)
        .bind(user_id)
        .bind(expires_at)
        .execute(pool)
        .await?;

    Ok(token)
}

// Esta función se ejecuta ANTES de llegar a cualquier handler de admin
pub async fn session_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let user = lookup_session(&state.pool, &jar).await.map_err(|e| {
        tracing::error!("Error consultando la sesión: {:?}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    match user {
        Some(user) => {
            // Adjuntamos el usuario para que los handlers sepan quién es
            request.extensions_mut().insert(user);
            Ok(next.run(request).await)
        }
        // Sin cookie válida no hay panel
        None => Err(StatusCode::UNAUTHORIZED),
    }
}
