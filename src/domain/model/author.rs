use super::TableModel;
use serde::Deserialize;
use utoipa::ToSchema;

/// A persisted author row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
}

/// Validated input for a new author. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct NewAuthor {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
}

impl NewAuthor {
    pub fn into_author(self, id: i32) -> Author {
        Author {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            middle_name: self.middle_name,
        }
    }
}

/// Table model for `authors`.
pub struct AuthorTable;

impl TableModel for AuthorTable {
    fn table_name(&self) -> &str {
        "authors"
    }

    fn create_table_sql(&self) -> &str {
        "CREATE TABLE IF NOT EXISTS authors (
            id SERIAL PRIMARY KEY,
            first_name TEXT,
            last_name TEXT,
            middle_name TEXT
        )"
    }
}
