use crate::cache::InvalidationBus;
use crate::db::DbPool;

// Estado compartido del router: el pool inyectado y el bus de invalidación.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub bus: InvalidationBus,
}
