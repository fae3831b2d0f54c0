use garde::Validate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// Lo que guardamos en la base de datos
#[derive(Debug, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip)] // ¡Jamás envíes el hash de la contraseña en el JSON!
    pub password_hash: String,
}

// Lo que recibimos para hacer Login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginPayload {
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
}

// Lo que recibimos para registrar un usuario del personal administrativo
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterPayload {
    #[garde(length(min = 1))]
    pub username: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 8))]
    pub password: String,
}

// El usuario autenticado que viaja en las extensions del request una vez
// que el middleware de sesión validó la cookie
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CurrentUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}
