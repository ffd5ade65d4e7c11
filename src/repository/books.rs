//! Book data access

use sqlx::sqlite::SqliteConnection;
use sqlx::Connection;

use crate::storage::Database;
use crate::types::{Book, BookReview, Category, Created, NewBook, RowId};
use crate::Result;

const SELECT_BOOKS: &str = "
    SELECT
        b.id,
        b.title,
        b.author,
        b.isbn,
        b.publication_date,
        b.user_id,
        u.username
    FROM Book b
    JOIN User u ON b.user_id = u.id";

const SELECT_BOOK_CATEGORIES: &str = "
    SELECT
        c.id,
        c.category_name
    FROM Category c
    JOIN BookCategory bc ON c.id = bc.category_id
    WHERE bc.book_id = ?";

const SELECT_BOOK_REVIEWS: &str = "
    SELECT
        r.id,
        r.rating,
        r.review_text,
        r.user_id,
        u.username
    FROM Review r
    JOIN User u ON r.user_id = u.id
    WHERE r.book_id = ?";

pub struct BookRepository<'a> {
    db: &'a Database,
}

impl<'a> BookRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// All books with their owner's username, categories and reviews.
    pub async fn list(&self) -> Result<Vec<Book>> {
        let mut conn = self.db.connect().await?;

        let mut books = sqlx::query_as::<_, Book>(SELECT_BOOKS)
            .fetch_all(&mut conn)
            .await?;

        for book in &mut books {
            load_relations(&mut conn, book).await?;
        }

        Ok(books)
    }

    /// Single book in the same shape as [`list`](Self::list), `None` if absent.
    pub async fn get(&self, id: RowId) -> Result<Option<Book>> {
        let mut conn = self.db.connect().await?;

        let sql = format!("{SELECT_BOOKS} WHERE b.id = ?");
        let book = sqlx::query_as::<_, Book>(&sql)
            .bind(id)
            .fetch_optional(&mut conn)
            .await?;

        match book {
            Some(mut book) => {
                load_relations(&mut conn, &mut book).await?;
                Ok(Some(book))
            }
            None => Ok(None),
        }
    }

    /// Insert a book and its category links, echoing the payload with its id.
    pub async fn create(&self, payload: NewBook) -> Result<Created<NewBook>> {
        let mut conn = self.db.connect().await?;
        let mut tx = conn.begin().await?;

        let id = sqlx::query(
            "INSERT INTO Book (title, author, isbn, publication_date, user_id)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&payload.title)
        .bind(&payload.author)
        .bind(&payload.isbn)
        .bind(&payload.publication_date)
        .bind(payload.user_id)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        if let Some(category_ids) = payload.category_ids() {
            insert_categories(&mut tx, id, category_ids).await?;
        }

        tx.commit().await?;
        tracing::debug!(book_id = id, "Created book");

        Ok(Created::new(payload, id))
    }

    /// Replace the scalar columns of a book. A non-empty `categories` list
    /// replaces the book's category links; an empty or missing one keeps them.
    ///
    /// Returns `false` without touching anything if the book does not exist.
    pub async fn update(&self, id: RowId, payload: &NewBook) -> Result<bool> {
        let mut conn = self.db.connect().await?;
        let mut tx = conn.begin().await?;

        let rows_affected = sqlx::query(
            "UPDATE Book
             SET title = ?,
                 author = ?,
                 isbn = ?,
                 publication_date = ?,
                 user_id = ?
             WHERE id = ?",
        )
        .bind(&payload.title)
        .bind(&payload.author)
        .bind(&payload.isbn)
        .bind(&payload.publication_date)
        .bind(payload.user_id)
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if rows_affected == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        if let Some(category_ids) = payload.category_ids() {
            sqlx::query("DELETE FROM BookCategory WHERE book_id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            insert_categories(&mut tx, id, category_ids).await?;
        }

        tx.commit().await?;
        tracing::debug!(book_id = id, "Updated book");

        Ok(true)
    }

    /// Delete a book after its category links and reviews.
    pub async fn delete(&self, id: RowId) -> Result<bool> {
        let mut conn = self.db.connect().await?;
        let mut tx = conn.begin().await?;

        sqlx::query("DELETE FROM BookCategory WHERE book_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM Review WHERE book_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let rows_affected = sqlx::query("DELETE FROM Book WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        let removed = rows_affected > 0;
        if removed {
            tracing::debug!(book_id = id, "Deleted book");
        }
        Ok(removed)
    }
}

async fn load_relations(conn: &mut SqliteConnection, book: &mut Book) -> Result<()> {
    book.categories = sqlx::query_as::<_, Category>(SELECT_BOOK_CATEGORIES)
        .bind(book.id)
        .fetch_all(&mut *conn)
        .await?;

    book.reviews = sqlx::query_as::<_, BookReview>(SELECT_BOOK_REVIEWS)
        .bind(book.id)
        .fetch_all(&mut *conn)
        .await?;

    Ok(())
}

async fn insert_categories(
    conn: &mut SqliteConnection,
    book_id: RowId,
    category_ids: &[RowId],
) -> Result<()> {
    for category_id in category_ids {
        sqlx::query("INSERT INTO BookCategory (book_id, category_id) VALUES (?, ?)")
            .bind(book_id)
            .bind(*category_id)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}
