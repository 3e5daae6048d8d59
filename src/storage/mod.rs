//! Data access layer.

pub mod postgres;

pub use postgres::BookstoreStore;
