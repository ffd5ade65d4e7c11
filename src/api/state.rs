//! API server state

use std::sync::Arc;

use crate::repository::{BookRepository, CategoryRepository, ReviewRepository};
use crate::storage::Database;

/// API server state
///
/// Holds only the connection factory. Repositories are built per request
/// from it, so no mutable state is shared between requests.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db: Arc::new(db) }
    }

    pub fn books(&self) -> BookRepository<'_> {
        BookRepository::new(&self.db)
    }

    pub fn reviews(&self) -> ReviewRepository<'_> {
        ReviewRepository::new(&self.db)
    }

    pub fn categories(&self) -> CategoryRepository<'_> {
        CategoryRepository::new(&self.db)
    }
}
