use garde::Validate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::AppError;

#[derive(Debug, Clone, Deserialize, Serialize, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
}

// Lo que recibimos para crear o editar una categoría
#[derive(Debug, Deserialize, Validate)]
pub struct CategorySchema {
    #[garde(length(min = 1))]
    pub name: String,
}

impl CategorySchema {
    pub fn into_name(self) -> Result<String, AppError> {
        self.validate()?;
        Ok(self.name)
    }
}
