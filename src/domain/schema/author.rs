use super::{BookView, Payload, ValidationErrors};
use crate::domain::model::{Author, Book, NewAuthor};
use serde::Serialize;
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

/// Fields an author payload may carry. `id` is output-only.
const INPUT_FIELDS: &[&str] = &["first_name", "last_name", "middle_name"];

/// Validates a create payload for an author. An empty middle name is dropped.
pub fn load_author(payload: &JsonValue) -> Result<NewAuthor, ValidationErrors> {
    let mut p = Payload::new(payload, INPUT_FIELDS)?;
    let first_name = p.required_str("first_name");
    let last_name = p.required_str("last_name");
    let middle_name = p.optional_str("middle_name").filter(|m| !m.is_empty());

    match (first_name, last_name) {
        (Some(first_name), Some(last_name)) if p.is_clean() => Ok(NewAuthor {
            first_name,
            last_name,
            middle_name,
        }),
        _ => Err(p.into_errors()),
    }
}

/// Author as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AuthorView {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
}

impl From<&Author> for AuthorView {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id,
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
            middle_name: author.middle_name.clone(),
        }
    }
}

/// Author together with every book that references it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AuthorDetailView {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub books: Vec<BookView>,
}

impl AuthorDetailView {
    pub fn new(author: &Author, books: &[Book]) -> Self {
        Self {
            id: author.id,
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
            middle_name: author.middle_name.clone(),
            books: books.iter().map(BookView::from).collect(),
        }
    }
}
