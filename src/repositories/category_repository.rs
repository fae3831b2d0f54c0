use uuid::Uuid;

use crate::cache::{InvalidationBus, ViewTag};
use crate::db::DbPool;
use crate::error::AppError;
use crate::models::category::{Category, CategorySchema};

pub const CATEGORY_VIEWS: &[ViewTag] = &[ViewTag::Categories, ViewTag::AdminNews];

pub async fn list(pool: &DbPool) -> Result<Vec<Category>, AppError> {
    let categories = sqlx::query_as::<_, Category>(
        "SELECT id, name FROM categories ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(categories)
}

pub async fn create(
    pool: &DbPool,
    bus: &InvalidationBus,
    input: CategorySchema,
) -> Result<Category, AppError> {
    let name = input.into_name()?;

    let category = sqlx::query_as::<_, Category>(
        "INSERT INTO categories (name) VALUES ($1) RETURNING id, name",
    )
    .bind(&name)
    .fetch_one(pool)
    .await?;

    bus.invalidate(CATEGORY_VIEWS);
    Ok(category)
}

pub async fn update(
    pool: &DbPool,
    bus: &InvalidationBus,
    id: &str,
    input: CategorySchema,
) -> Result<Category, AppError> {
    let id = Uuid::parse_str(id).map_err(|_| AppError::NotFound)?;
    let name = input.into_name()?;

    let category = sqlx::query_as::<_, Category>(
        "UPDATE categories SET name = $1 WHERE id = $2 RETURNING id, name",
    )
    .bind(&name)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::NotFound)?;

    bus.invalidate(CATEGORY_VIEWS);
    Ok(category)
}

// Id malformado: no-op que devuelve None sin consultar la base.
// Las noticias de una categoría borrada quedan sin categorizar (SET NULL).
pub async fn delete(
    pool: &DbPool,
    bus: &InvalidationBus,
    id: &str,
) -> Result<Option<Category>, AppError> {
    let Ok(id) = Uuid::parse_str(id) else {
        return Ok(None);
    };

    let deleted = sqlx::query_as::<_, Category>(
        "DELETE FROM categories WHERE id = $1 RETURNING id, name",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if deleted.is_some() {
        bus.invalidate(CATEGORY_VIEWS);
    }
    Ok(deleted)
}
