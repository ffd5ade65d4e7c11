//! Per-resource data access
//!
//! Repositories borrow a [`Database`](crate::storage::Database) and are built
//! fresh for each request. Each method opens its own connection; methods that
//! issue more than one write run them in a single transaction.

pub mod books;
pub mod categories;
pub mod reviews;

pub use books::BookRepository;
pub use categories::CategoryRepository;
pub use reviews::ReviewRepository;
