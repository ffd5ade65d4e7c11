//! bookreviews - a small JSON REST API over a book-review dataset
//!
//! Books, reviews and categories live in a single SQLite file. Requests are
//! dispatched by verb and by the first path segment:
//! - `/books` and `/books/{id}`: list, get, create, update, delete
//! - `/reviews` and `/reviews/{id}`: list, get, create, delete
//! - `/categories`: list, create

pub mod api;
pub mod config;
pub mod error;
pub mod repository;
pub mod storage;
pub mod types;

pub use error::{Error, Result};
