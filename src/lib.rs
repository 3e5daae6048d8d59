pub mod app;
pub mod domain;
pub mod error;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::bootstrap::{bootstrap, is_bootstrapped, BootstrapOutcome};
pub use domain::model::{Author, Book, NewAuthor, NewBook};
pub use domain::seed::{SeedRecord, DEFAULT_SEED};
pub use error::{ApiError, StoreError};
pub use storage::BookstoreStore;
