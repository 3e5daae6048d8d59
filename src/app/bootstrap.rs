//! One-time schema creation and seeding.
//!
//! Bootstrap keys off the presence of the `authors` table in the connection's
//! current schema. When it is missing, both tables are created and the seed set
//! is inserted in a single transaction. When it exists nothing happens, even if
//! the tables are empty.

use crate::domain::model::{AuthorTable, TableModel, TABLES};
use crate::domain::seed::SeedRecord;
use crate::error::StoreResult;
use crate::storage::BookstoreStore;
use sqlx::postgres::PgConnection;
use sqlx::Connection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Tables were created and seeded.
    Created { authors: usize, books: usize },
    /// Tables already existed; seeding was skipped.
    AlreadyPresent,
}

/// Whether the `authors` table exists in the current schema.
pub async fn is_bootstrapped(store: &BookstoreStore) -> StoreResult<bool> {
    let mut conn = store.connect().await?;
    let exists = table_exists(&mut conn, AuthorTable.table_name()).await?;
    conn.close().await?;
    Ok(exists)
}

/// Creates the tables and inserts `seed` unless the schema is already present.
pub async fn bootstrap(store: &BookstoreStore, seed: &[SeedRecord]) -> StoreResult<BootstrapOutcome> {
    let mut conn = store.connect().await?;

    if table_exists(&mut conn, AuthorTable.table_name()).await? {
        tracing::info!("schema already present, skipping bootstrap");
        conn.close().await?;
        return Ok(BootstrapOutcome::AlreadyPresent);
    }

    let mut tx = conn.begin().await?;
    for table in TABLES {
        sqlx::query(table.create_table_sql()).execute(&mut *tx).await?;
        tracing::info!(table = table.table_name(), "created table");
    }

    for record in seed {
        let author_id: i32 = sqlx::query_scalar(
            "INSERT INTO authors (first_name, last_name, middle_name) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(record.author.first_name)
        .bind(record.author.last_name)
        .bind(record.author.middle_name)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO books (title, author_id) VALUES ($1, $2)")
            .bind(record.title)
            .bind(author_id)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    conn.close().await?;

    tracing::info!(records = seed.len(), "seeded authors and books");
    Ok(BootstrapOutcome::Created {
        authors: seed.len(),
        books: seed.len(),
    })
}

async fn table_exists(conn: &mut PgConnection, table_name: &str) -> StoreResult<bool> {
    let exists: bool = sqlx::query_scalar(
        "SELECT EXISTS (
            SELECT 1 FROM pg_tables
            WHERE schemaname = current_schema() AND tablename = $1
        )",
    )
    .bind(table_name)
    .fetch_one(&mut *conn)
    .await?;
    Ok(exists)
}
