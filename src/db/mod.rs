use sqlx::{postgres::PgPoolOptions, Pool, Postgres};
use std::env;

// Definimos un alias para "Pool<Postgres>"
pub type DbPool = Pool<Postgres>;

// El pool se crea una sola vez al arrancar y se inyecta a los handlers
// vía el estado del router; nadie lo referencia como global ambiente.
pub async fn init_db() -> DbPool {
    // Leemos la URL del archivo .env
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL no está definido en .env");

    PgPoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await
        .expect("Error al conectar a la Base de Datos. ¿Está corriendo Postgres?")
}
