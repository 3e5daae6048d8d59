use anyhow::Context;
use bookstore_api::infra::{config, logging};
use bookstore_api::{bootstrap, is_bootstrapped, BookstoreStore, DEFAULT_SEED};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--bootstrap]\n\
         \n\
         Reads env vars (all optional):\n\
           DATABASE_URL, DATABASE_SCHEMA, BIND_ADDR, RUST_LOG\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let run_bootstrap = args.iter().any(|a| a == "--bootstrap");

    println!("> Preflight:");
    println!("  DATABASE_URL={}", redact(&config::database_url()));
    println!(
        "  DATABASE_SCHEMA={}",
        config::database_schema().unwrap_or_else(|| "<server default>".to_string())
    );
    println!("  BIND_ADDR={}", config::bind_addr());

    let store = BookstoreStore::from_env()?;
    store.ping().await.context("database is not reachable")?;
    println!("  Database reachable.");

    if is_bootstrapped(&store).await? {
        println!("  Schema present.");
    } else if run_bootstrap {
        println!("  Schema missing -> running bootstrap...");
        let outcome = bootstrap(&store, DEFAULT_SEED).await?;
        println!("  Bootstrap: {:?}", outcome);
    } else {
        println!("  Schema missing; api_server will create and seed it on start (or re-run with --bootstrap).");
    }

    println!("> Preflight OK.");
    Ok(())
}

/// Hides the password part of a connection string.
fn redact(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            let credentials = &url[scheme_end + 3..at];
            match credentials.find(':') {
                Some(colon) => format!(
                    "{}{}:***{}",
                    &url[..scheme_end + 3],
                    &credentials[..colon],
                    &url[at..]
                ),
                None => url.to_string(),
            }
        }
        _ => url.to_string(),
    }
}
