use super::{Payload, ValidationErrors};
use crate::domain::model::{Book, NewBook};
use serde::Serialize;
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

/// Fields a book payload may carry. `id` is output-only.
const INPUT_FIELDS: &[&str] = &["title", "author_id"];

/// Validates a create/replace payload for a book.
pub fn load_book(payload: &JsonValue) -> Result<NewBook, ValidationErrors> {
    let mut p = Payload::new(payload, INPUT_FIELDS)?;
    let title = p.required_str("title");
    let author_id = p.required_int("author_id");

    match (title, author_id) {
        (Some(title), Some(author_id)) if p.is_clean() => Ok(NewBook { title, author_id }),
        _ => Err(p.into_errors()),
    }
}

/// Book as returned by the API. The author reference is input-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BookView {
    pub id: i32,
    pub title: String,
}

impl From<&Book> for BookView {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
        }
    }
}
