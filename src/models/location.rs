use garde::Validate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::AppError;

#[derive(Debug, Clone, Deserialize, Serialize, FromRow)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
}

// Lo que recibimos para crear o editar una ubicación
#[derive(Debug, Deserialize, Validate)]
pub struct LocationSchema {
    #[garde(length(min = 1))]
    pub name: String,
}

impl LocationSchema {
    pub fn into_name(self) -> Result<String, AppError> {
        self.validate()?;
        Ok(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nombre_vacio_es_rechazado() {
        let schema = LocationSchema {
            name: "".to_string(),
        };
        assert!(matches!(schema.into_name(), Err(AppError::Validation(_))));
    }

    #[test]
    fn nombre_valido_pasa() {
        let schema = LocationSchema {
            name: "Koodathai".to_string(),
        };
        assert_eq!(schema.into_name().unwrap(), "Koodathai");
    }
}
