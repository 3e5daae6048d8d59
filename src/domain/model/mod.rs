//! Persisted entities and the tables that back them.

pub mod author;
pub mod book;

pub use author::{Author, AuthorTable, NewAuthor};
pub use book::{Book, BookTable, NewBook};

/// Contract for a table owned by the service.
///
/// Bootstrap walks [`TABLES`] in order, so a table must come after every table it
/// references.
pub trait TableModel: Send + Sync {
    /// Returns the name of the database table for this model.
    fn table_name(&self) -> &str;

    /// Returns the SQL CREATE TABLE statement for this model.
    fn create_table_sql(&self) -> &str;
}

/// Every table of the service, parents before children.
pub const TABLES: &[&dyn TableModel] = &[&AuthorTable, &BookTable];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authors_are_created_before_books() {
        let names: Vec<&str> = TABLES.iter().map(|t| t.table_name()).collect();
        assert_eq!(names, vec!["authors", "books"]);
    }

    #[test]
    fn books_cascade_on_author_delete() {
        let sql = BookTable.create_table_sql();
        assert!(sql.contains("REFERENCES authors (id) ON DELETE CASCADE"));
    }
}
