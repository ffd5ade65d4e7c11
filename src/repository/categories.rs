//! Category data access

use crate::storage::Database;
use crate::types::{Category, Created, NewCategory};
use crate::Result;

pub struct CategoryRepository<'a> {
    db: &'a Database,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Category>> {
        let mut conn = self.db.connect().await?;

        let categories = sqlx::query_as::<_, Category>(
            "SELECT
                c.id,
                c.category_name
             FROM Category c",
        )
        .fetch_all(&mut conn)
        .await?;

        Ok(categories)
    }

    pub async fn create(&self, payload: NewCategory) -> Result<Created<NewCategory>> {
        let mut conn = self.db.connect().await?;

        let id = sqlx::query("INSERT INTO Category (category_name) VALUES (?)")
            .bind(&payload.category_name)
            .execute(&mut conn)
            .await?
            .last_insert_rowid();

        tracing::debug!(category_id = id, "Created category");

        Ok(Created::new(payload, id))
    }
}
