use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

// Hashear contraseña (Argon2 con salt aleatorio)
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AppError::Internal("Error de seguridad".to_string()))
}

// Verificar contraseña contra el hash guardado
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(password_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn una_contrasena_correcta_verifica() {
        let hash = hash_password("secreto-largo").unwrap();
        assert!(verify_password("secreto-largo", &hash));
    }

    #[test]
    fn una_contrasena_incorrecta_no_verifica() {
        let hash = hash_password("secreto-largo").unwrap();
        assert!(!verify_password("otra-cosa", &hash));
    }

    #[test]
    fn un_hash_corrupto_no_verifica() {
        assert!(!verify_password("secreto", "esto-no-es-un-hash"));
    }
}
