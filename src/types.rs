//! Core types for bookreviews
//!
//! Read types carry joined columns (usernames, book titles) and are built by
//! the repositories. `New*` types are request payloads; `Created` echoes one
//! back with the generated id attached.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row id type
pub type RowId = i64;

/// Book with its owner's username and freshly loaded relations
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Book {
    pub id: RowId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publication_date: String,
    pub user_id: RowId,
    pub username: String,
    #[sqlx(skip)]
    pub categories: Vec<Category>,
    #[sqlx(skip)]
    pub reviews: Vec<BookReview>,
}

/// Review as embedded in a [`Book`], attributed to its author
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct BookReview {
    pub id: RowId,
    pub rating: i64,
    pub review_text: String,
    pub user_id: RowId,
    pub username: String,
}

/// Review joined to the reviewed book's title and the reviewer's username
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Review {
    pub id: RowId,
    pub rating: i64,
    pub review_text: String,
    pub book_id: RowId,
    pub user_id: RowId,
    pub title: String,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Category {
    pub id: RowId,
    pub category_name: String,
}

/// Body of `POST /books` and `PUT /books/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publication_date: String,
    pub user_id: RowId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<RowId>>,
}

impl NewBook {
    /// Category ids to (re)associate, if the payload carries a non-empty set.
    pub fn category_ids(&self) -> Option<&[RowId]> {
        self.categories.as_deref().filter(|ids| !ids.is_empty())
    }
}

/// Body of `POST /reviews`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewReview {
    pub book_id: RowId,
    pub user_id: RowId,
    pub rating: i64,
    pub review_text: String,
}

/// Body of `POST /categories`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCategory {
    pub category_name: String,
}

/// Create payload echoed back with its generated id.
///
/// Related rows are not re-read, so this is flat even for books.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Created<T> {
    #[serde(flatten)]
    pub record: T,
    pub id: RowId,
}

impl<T> Created<T> {
    pub fn new(record: T, id: RowId) -> Self {
        Self { record, id }
    }
}
