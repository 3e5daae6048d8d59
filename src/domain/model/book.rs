use super::TableModel;
use serde::Deserialize;
use utoipa::ToSchema;

/// A persisted book row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author_id: i32,
}

/// Validated input for a new book, or the full replacement applied by an update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct NewBook {
    pub title: String,
    /// Id of an existing author.
    pub author_id: i32,
}

impl NewBook {
    pub fn into_book(self, id: i32) -> Book {
        Book {
            id,
            title: self.title,
            author_id: self.author_id,
        }
    }
}

/// Table model for `books`.
pub struct BookTable;

impl TableModel for BookTable {
    fn table_name(&self) -> &str {
        "books"
    }

    fn create_table_sql(&self) -> &str {
        "CREATE TABLE IF NOT EXISTS books (
            id SERIAL PRIMARY KEY,
            title TEXT,
            author_id INTEGER REFERENCES authors (id) ON DELETE CASCADE
        )"
    }
}
