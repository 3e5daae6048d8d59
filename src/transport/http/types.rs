use crate::storage::BookstoreStore;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<BookstoreStore>,
}

impl AppState {
    pub fn new(store: BookstoreStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
