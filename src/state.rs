use crate::db::{DbPool, OrmConn};
use crate::generation::GenerationClient;

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: OrmConn,
    pub generation: GenerationClient,
}
