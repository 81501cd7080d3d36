//! diblog - fetch rendered DropInBlog content from the terminal
//!
//! A thin wrapper over [`dropinblog::Client`]: parse arguments, run one
//! endpoint method, print the payload. Sitemap and feed bodies are printed
//! verbatim; everything else is printed as pretty JSON.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dropinblog::cli::{Cli, Command};
use dropinblog::{Client, ContentPayload};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = Client::new(cli.token, cli.blog_id)
        .with_cache_ttl(Duration::from_secs(cli.ttl_seconds));

    let result = match cli.command {
        Command::List { page } => client.fetch_main_list(page.as_deref()).await,
        Command::Post { slug } => client.fetch_post(&slug).await,
        Command::Category { slug, page } => client.fetch_categories(&slug, page.as_deref()).await,
        Command::Author { slug, page } => client.fetch_author(&slug, page.as_deref()).await,
        Command::Sitemap => client.fetch_sitemap().await,
        Command::Feed { category, author } => match (category, author) {
            (Some(slug), _) => client.fetch_category_feed(&slug).await,
            (None, Some(slug)) => client.fetch_author_feed(&slug).await,
            (None, None) => client.fetch_blog_feed().await,
        },
    };

    match result {
        Ok(payload) => {
            print_payload(&payload);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Prints body-style payloads (sitemap, feeds) verbatim and everything else
/// as pretty JSON
fn print_payload(payload: &ContentPayload) {
    if let Some(sitemap) = &payload.sitemap {
        println!("{sitemap}");
        return;
    }
    if let Some(feed) = &payload.feed {
        println!("{feed}");
        return;
    }
    match serde_json::to_string_pretty(payload) {
        Ok(json) => println!("{json}"),
        Err(_) => println!("{payload:?}"),
    }
}
