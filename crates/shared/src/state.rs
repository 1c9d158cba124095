use std::sync::Arc;

use crate::{
    abstract_trait::DynHashing,
    config::{ConnectionPool, Hashing},
    session::SessionStore,
    utils::DependenciesInject,
};

#[derive(Clone, Debug)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub session_store: SessionStore,
}

impl AppState {
    pub fn new(pool: ConnectionPool) -> Self {
        let hashing = Arc::new(Hashing::new()) as DynHashing;
        let di_container = DependenciesInject::new(pool, hashing);

        Self::from_container(di_container)
    }

    /// Assemble state around a prebuilt DI container; the test harnesses use
    /// this with in-memory repositories.
    pub fn from_container(di_container: DependenciesInject) -> Self {
        Self {
            di_container,
            session_store: SessionStore::new(),
        }
    }
}
