//! Postgres-backed data access for authors and books.
//!
//! Every operation opens its own connection, runs one parameterized statement
//! and closes the connection again. There is no pool and no retry: a failure
//! is returned to the caller as a [`StoreError`].

use crate::domain::model::{Author, Book, NewAuthor, NewBook};
use crate::error::{is_foreign_key_violation, StoreError, StoreResult};
use crate::infra::config;
use sqlx::postgres::{PgConnectOptions, PgConnection, PgRow};
use sqlx::{ConnectOptions, Connection, Row};
use std::str::FromStr;

const BOOK_COLUMNS: &str = "id, title, author_id";
const AUTHOR_COLUMNS: &str = "id, first_name, last_name, middle_name";

/// Connection settings for the bookstore database. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct BookstoreStore {
    options: PgConnectOptions,
}

impl BookstoreStore {
    /// Parses `database_url`. No connection is made until the first operation.
    pub fn new(database_url: &str) -> StoreResult<Self> {
        let options = PgConnectOptions::from_str(database_url).map_err(StoreError::InvalidUrl)?;
        Ok(Self { options })
    }

    /// Builds a store from `DATABASE_URL` and `DATABASE_SCHEMA`.
    pub fn from_env() -> StoreResult<Self> {
        let store = Self::new(&config::database_url())?;
        Ok(match config::database_schema() {
            Some(schema) => store.with_schema(&schema),
            None => store,
        })
    }

    /// Runs every connection with `search_path` set to `schema`.
    pub fn with_schema(self, schema: &str) -> Self {
        Self {
            options: self.options.options([("search_path", schema)]),
        }
    }

    pub(crate) async fn connect(&self) -> StoreResult<PgConnection> {
        self.options.connect().await.map_err(StoreError::Connect)
    }

    /// Opens a connection and runs `SELECT 1`.
    pub async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.connect().await?;
        sqlx::query("SELECT 1").execute(&mut conn).await?;
        release(conn, ()).await
    }

    // --- books ---

    pub async fn list_books(&self) -> StoreResult<Vec<Book>> {
        let mut conn = self.connect().await?;
        let rows = sqlx::query(&format!("SELECT {BOOK_COLUMNS} FROM books"))
            .fetch_all(&mut conn)
            .await?;
        let books = rows.iter().map(book_from_row).collect::<Result<Vec<_>, sqlx::Error>>()?;
        release(conn, books).await
    }

    pub async fn get_book_by_id(&self, book_id: i32) -> StoreResult<Option<Book>> {
        let mut conn = self.connect().await?;
        let row = sqlx::query(&format!("SELECT {BOOK_COLUMNS} FROM books WHERE id = $1"))
            .bind(book_id)
            .fetch_optional(&mut conn)
            .await?;
        let book = row.as_ref().map(book_from_row).transpose()?;
        release(conn, book).await
    }

    /// First book with exactly this title. Titles are not unique and the query
    /// has no ordering, so with duplicates any one of them may come back.
    pub async fn get_book_by_title(&self, title: &str) -> StoreResult<Option<Book>> {
        let mut conn = self.connect().await?;
        let row = sqlx::query(&format!("SELECT {BOOK_COLUMNS} FROM books WHERE title = $1 LIMIT 1"))
            .bind(title)
            .fetch_optional(&mut conn)
            .await?;
        let book = row.as_ref().map(book_from_row).transpose()?;
        release(conn, book).await
    }

    pub async fn get_books_by_author_id(&self, author_id: i32) -> StoreResult<Vec<Book>> {
        let mut conn = self.connect().await?;
        let rows = sqlx::query(&format!("SELECT {BOOK_COLUMNS} FROM books WHERE author_id = $1"))
            .bind(author_id)
            .fetch_all(&mut conn)
            .await?;
        let books = rows.iter().map(book_from_row).collect::<Result<Vec<_>, sqlx::Error>>()?;
        release(conn, books).await
    }

    /// Inserts a book. A dangling author reference is rejected by the foreign
    /// key and reported as [`StoreError::MissingAuthor`]; nothing is written.
    pub async fn insert_book(&self, book: NewBook) -> StoreResult<Book> {
        let mut conn = self.connect().await?;
        let id: i32 = sqlx::query_scalar("INSERT INTO books (title, author_id) VALUES ($1, $2) RETURNING id")
            .bind(&book.title)
            .bind(book.author_id)
            .fetch_one(&mut conn)
            .await
            .map_err(|e| referential(e, book.author_id))?;
        release(conn, book.into_book(id)).await
    }

    /// Overwrites title and author reference. An unknown id is a silent no-op.
    pub async fn update_book(&self, book: &Book) -> StoreResult<()> {
        let mut conn = self.connect().await?;
        sqlx::query("UPDATE books SET title = $1, author_id = $2 WHERE id = $3")
            .bind(&book.title)
            .bind(book.author_id)
            .bind(book.id)
            .execute(&mut conn)
            .await
            .map_err(|e| referential(e, book.author_id))?;
        release(conn, ()).await
    }

    /// Deletes a book. An unknown id is a silent no-op.
    pub async fn delete_book_by_id(&self, book_id: i32) -> StoreResult<()> {
        let mut conn = self.connect().await?;
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(book_id)
            .execute(&mut conn)
            .await?;
        release(conn, ()).await
    }

    // --- authors ---

    pub async fn list_authors(&self) -> StoreResult<Vec<Author>> {
        let mut conn = self.connect().await?;
        let rows = sqlx::query(&format!("SELECT {AUTHOR_COLUMNS} FROM authors"))
            .fetch_all(&mut conn)
            .await?;
        let authors = rows.iter().map(author_from_row).collect::<Result<Vec<_>, sqlx::Error>>()?;
        release(conn, authors).await
    }

    pub async fn get_author_by_id(&self, author_id: i32) -> StoreResult<Option<Author>> {
        let mut conn = self.connect().await?;
        let row = sqlx::query(&format!("SELECT {AUTHOR_COLUMNS} FROM authors WHERE id = $1"))
            .bind(author_id)
            .fetch_optional(&mut conn)
            .await?;
        let author = row.as_ref().map(author_from_row).transpose()?;
        release(conn, author).await
    }

    pub async fn insert_author(&self, author: NewAuthor) -> StoreResult<Author> {
        let mut conn = self.connect().await?;
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO authors (first_name, last_name, middle_name) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&author.first_name)
        .bind(&author.last_name)
        .bind(author.middle_name.as_deref())
        .fetch_one(&mut conn)
        .await?;
        release(conn, author.into_author(id)).await
    }

    /// Deletes an author; the foreign key cascades to its books. An unknown id
    /// is a silent no-op.
    pub async fn delete_author_by_id(&self, author_id: i32) -> StoreResult<()> {
        let mut conn = self.connect().await?;
        sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(author_id)
            .execute(&mut conn)
            .await?;
        release(conn, ()).await
    }
}

/// Closes `conn` and hands back `value`.
async fn release<T>(conn: PgConnection, value: T) -> StoreResult<T> {
    conn.close().await?;
    Ok(value)
}

fn referential(err: sqlx::Error, author_id: i32) -> StoreError {
    if is_foreign_key_violation(&err) {
        StoreError::MissingAuthor(author_id)
    } else {
        StoreError::Query(err)
    }
}

/// Maps `id, title, author_id` by position.
fn book_from_row(row: &PgRow) -> Result<Book, sqlx::Error> {
    Ok(Book {
        id: row.try_get(0)?,
        title: row.try_get(1)?,
        author_id: row.try_get(2)?,
    })
}

/// Maps `id, first_name, last_name, middle_name` by position.
fn author_from_row(row: &PgRow) -> Result<Author, sqlx::Error> {
    Ok(Author {
        id: row.try_get(0)?,
        first_name: row.try_get(1)?,
        last_name: row.try_get(2)?,
        middle_name: row.try_get(3)?,
    })
}
