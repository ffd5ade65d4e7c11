//! Review data access

use crate::storage::Database;
use crate::types::{Created, NewReview, Review, RowId};
use crate::Result;

const SELECT_REVIEWS: &str = "
    SELECT
        r.id,
        r.rating,
        r.review_text,
        r.book_id,
        r.user_id,
        b.title,
        u.username
    FROM Review r
    JOIN Book b ON r.book_id = b.id
    JOIN User u ON r.user_id = u.id";

pub struct ReviewRepository<'a> {
    db: &'a Database,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// All reviews with the reviewed book's title and the reviewer's username.
    pub async fn list(&self) -> Result<Vec<Review>> {
        let mut conn = self.db.connect().await?;

        let reviews = sqlx::query_as::<_, Review>(SELECT_REVIEWS)
            .fetch_all(&mut conn)
            .await?;

        Ok(reviews)
    }

    pub async fn get(&self, id: RowId) -> Result<Option<Review>> {
        let mut conn = self.db.connect().await?;

        let sql = format!("{SELECT_REVIEWS} WHERE r.id = ?");
        let review = sqlx::query_as::<_, Review>(&sql)
            .bind(id)
            .fetch_optional(&mut conn)
            .await?;

        Ok(review)
    }

    pub async fn create(&self, payload: NewReview) -> Result<Created<NewReview>> {
        let mut conn = self.db.connect().await?;

        let id = sqlx::query(
            "INSERT INTO Review (book_id, user_id, rating, review_text)
             VALUES (?, ?, ?, ?)",
        )
        .bind(payload.book_id)
        .bind(payload.user_id)
        .bind(payload.rating)
        .bind(&payload.review_text)
        .execute(&mut conn)
        .await?
        .last_insert_rowid();

        tracing::debug!(review_id = id, book_id = payload.book_id, "Created review");

        Ok(Created::new(payload, id))
    }

    pub async fn delete(&self, id: RowId) -> Result<bool> {
        let mut conn = self.db.connect().await?;

        let rows_affected = sqlx::query("DELETE FROM Review WHERE id = ?")
            .bind(id)
            .execute(&mut conn)
            .await?
            .rows_affected();

        let removed = rows_affected > 0;
        if removed {
            tracing::debug!(review_id = id, "Deleted review");
        }
        Ok(removed)
    }
}
