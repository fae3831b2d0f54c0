use uuid::Uuid;

use crate::cache::{InvalidationBus, ViewTag};
use crate::db::DbPool;
use crate::error::AppError;
use crate::models::location::{Location, LocationSchema};

// Las mutaciones de ubicaciones también invalidan el listado de noticias
// del panel (la columna "ubicación" se resuelve por relación)
pub const LOCATION_VIEWS: &[ViewTag] = &[ViewTag::Locations, ViewTag::AdminNews];

// Orden alfabético SIEMPRE: el dropdown y la tabla del panel deben ser
// deterministas sin importar el orden de inserción
pub async fn list(pool: &DbPool) -> Result<Vec<Location>, AppError> {
    let locations = sqlx::query_as::<_, Location>(
        "SELECT id, name FROM locations ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(locations)
}

// Búsqueda exacta por nombre: el nombre es la clave de enrutamiento de
// /location/:name
pub async fn find_by_name(pool: &DbPool, name: &str) -> Result<Option<Location>, AppError> {
    let location = sqlx::query_as::<_, Location>(
        "SELECT id, name FROM locations WHERE name = $1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(location)
}

pub async fn create(
    pool: &DbPool,
    bus: &InvalidationBus,
    input: LocationSchema,
) -> Result<Location, AppError> {
    let name = input.into_name()?;

    let location = sqlx::query_as::<_, Location>(
        "INSERT INTO locations (name) VALUES ($1) RETURNING id, name",
    )
    .bind(&name)
    .fetch_one(pool)
    .await?;

    bus.invalidate(LOCATION_VIEWS);
    Ok(location)
}

pub async fn update(
    pool: &DbPool,
    bus: &InvalidationBus,
    id: &str,
    input: LocationSchema,
) -> Result<Location, AppError> {
    let id = Uuid::parse_str(id).map_err(|_| AppError::NotFound)?;
    let name = input.into_name()?;

    let location = sqlx::query_as::<_, Location>(
        "UPDATE locations SET name = $1 WHERE id = $2 RETURNING id, name",
    )
    .bind(&name)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::NotFound)?;

    bus.invalidate(LOCATION_VIEWS);
    Ok(location)
}

// Un id malformado es un no-op (None) sin tocar la base de datos.
// Borrar una ubicación con noticias asociadas falla por la clave foránea
// y llega al caller como mensaje descriptivo.
pub async fn delete(
    pool: &DbPool,
    bus: &InvalidationBus,
    id: &str,
) -> Result<Option<Location>, AppError> {
    let Ok(id) = Uuid::parse_str(id) else {
        return Ok(None);
    };

    let deleted = sqlx::query_as::<_, Location>(
        "DELETE FROM locations WHERE id = $1 RETURNING id, name",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if deleted.is_some() {
        bus.invalidate(LOCATION_VIEWS);
    }
    Ok(deleted)
}
