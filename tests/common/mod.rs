//! Shared harness: every test gets its own Postgres schema, bootstrapped with the
//! default seed set, and an in-process server on an ephemeral port.

use bookstore_api::infra::config;
use bookstore_api::{bootstrap, transport, BookstoreStore, DEFAULT_SEED};
use sqlx::{Connection, PgConnection};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::task::JoinHandle;

static SCHEMA_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub struct TestApp {
    pub store: BookstoreStore,
    pub client: reqwest::Client,
    base_url: String,
    database_url: String,
    schema: String,
    server: JoinHandle<()>,
}

impl TestApp {
    /// Panics when `DATABASE_URL` does not point at a reachable Postgres.
    pub async fn start() -> TestApp {
        dotenv::dotenv().ok();
        Self::start_with(config::database_url()).await
    }

    pub async fn start_with(database_url: String) -> TestApp {
        let mut admin = PgConnection::connect(&database_url)
            .await
            .expect("DATABASE_URL must point at a reachable Postgres");
        let schema = unique_schema_name();
        sqlx::query(&format!("CREATE SCHEMA \"{}\"", schema))
            .execute(&mut admin)
            .await
            .expect("create test schema");
        admin.close().await.expect("close admin connection");

        let store = BookstoreStore::new(&database_url)
            .expect("parse DATABASE_URL")
            .with_schema(&schema);
        bootstrap(&store, DEFAULT_SEED).await.expect("bootstrap test schema");

        let router = transport::http::create_router(transport::http::AppState::new(store.clone()));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let port = listener.local_addr().expect("local addr").port();
        let server = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        TestApp {
            store,
            client: reqwest::Client::new(),
            base_url: format!("http://127.0.0.1:{}", port),
            database_url,
            schema,
            server,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Stops the server and drops the test schema.
    pub async fn teardown(self) {
        self.server.abort();
        let _ = self.server.await;
        if let Ok(mut admin) = PgConnection::connect(&self.database_url).await {
            let _ = sqlx::query(&format!("DROP SCHEMA \"{}\" CASCADE", self.schema))
                .execute(&mut admin)
                .await;
            let _ = admin.close().await;
        }
    }
}

fn unique_schema_name() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or_default();
    format!(
        "bookstore_test_{}_{}_{}",
        std::process::id(),
        SCHEMA_COUNTER.fetch_add(1, Ordering::SeqCst),
        nanos
    )
}
