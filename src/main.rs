//! # linksurfer CLI Application
//!
//! This module implements the command-line interface for the indexer,
//! exposing single-page indexing, recursive crawling from a seed and the
//! retrieval views over the page store.
//!
//! ## Subcommands
//!
//! - `init`: Create the page store schema
//! - `index`: Index one page without following links
//! - `crawl`: Index a seed page and the first links it contains
//! - `search`: Index a page if needed, then list pages sharing its primary category
//! - `show`: Print the summary, keywords and categories of a page
//! - `recent`: List indexed pages
//! - `category`: List pages scored in a category
//! - `export`: Save a page summary to a text file
//! - `update-metadata`: Re-extract the heading and paragraph excerpts of a page

mod telemetry;

use clap::{Args, Parser, Subcommand};
use linksurfer::analysis::KeywordDictionary;
use linksurfer::crawler::{CrawlController, CrawlerConfig, IndexOutcome, MetadataRefresh};
use linksurfer::index::{Database, PageStore};
use linksurfer::search::{self, SearchOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

/// Seed used by `crawl` when no URL is given
const DEFAULT_SEED: &str = "https://www.bbc.co.uk";

#[derive(Parser)]
#[command(author, version, about = "Index web pages by keyword category", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Database path
    #[arg(long, global = true, default_value = "data/linksurfer.db")]
    database: PathBuf,

    /// Keyword dictionary (JSON object of keyword to category)
    #[arg(long, global = true, default_value = "data/keywords.json")]
    keywords: PathBuf,

    /// User agent sent with every request
    #[arg(long, global = true, default_value = "Mozilla/5.0")]
    user_agent: String,

    /// Fetch timeout in seconds
    #[arg(long, global = true, default_value = "30")]
    timeout_secs: u64,

    /// Also write logs to linksurfer.log in this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the database schema
    Init,

    /// Index a single page
    Index(UrlArgs),

    /// Index a seed page and the first links found on it
    Crawl(CrawlArgs),

    /// Find pages related to a URL, indexing it first if needed
    Search(SearchArgs),

    /// Show the stored summary, keywords and categories of a page
    Show(UrlArgs),

    /// List indexed pages
    Recent(RecentArgs),

    /// List pages scored in a category
    Category(CategoryArgs),

    /// Save the summary of a page to a text file
    Export(ExportArgs),

    /// Re-extract the heading and paragraph excerpts of an indexed page
    UpdateMetadata(UrlArgs),
}

#[derive(Args, Debug)]
struct UrlArgs {
    /// URL of the page
    #[arg(required = true)]
    url: String,
}

#[derive(Args, Debug)]
struct CrawlArgs {
    /// Seed URL
    #[arg(default_value = DEFAULT_SEED)]
    url: String,
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// URL of the page
    #[arg(required = true)]
    url: String,

    /// Limit results
    #[arg(short, long, default_value = "5")]
    limit: usize,
}

#[derive(Args, Debug)]
struct RecentArgs {
    /// Limit results
    #[arg(short, long, default_value = "10")]
    limit: usize,
}

#[derive(Args, Debug)]
struct CategoryArgs {
    /// Category name, e.g. Finance or UK_Politics
    #[arg(required = true)]
    name: String,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// URL of the page
    #[arg(required = true)]
    url: String,

    /// Directory for the text file
    #[arg(short, long, default_value = "data/text_output")]
    output_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    telemetry::setup_logging(cli.global.log_dir.as_deref())?;

    // Execute the appropriate command
    match cli.command {
        Some(Commands::Init) => {
            open_database(&cli.global.database).await?;
            println!("Database initialized at {}", cli.global.database.display());
        }
        Some(Commands::Index(args)) => {
            index_command(&cli.global, args).await?;
        }
        Some(Commands::Crawl(args)) => {
            crawl_command(&cli.global, args).await?;
        }
        Some(Commands::Search(args)) => {
            search_command(&cli.global, args).await?;
        }
        Some(Commands::Show(args)) => {
            show_command(&cli.global, args).await?;
        }
        Some(Commands::Recent(args)) => {
            recent_command(&cli.global, args).await?;
        }
        Some(Commands::Category(args)) => {
            category_command(&cli.global, args).await?;
        }
        Some(Commands::Export(args)) => {
            export_command(&cli.global, args).await?;
        }
        Some(Commands::UpdateMetadata(args)) => {
            update_metadata_command(&cli.global, args).await?;
        }
        None => {
            // If no command is provided, show help
            let _ = Cli::parse_from(["linksurfer", "--help"]);
        }
    }

    Ok(())
}

/// Open the database, creating its directory if needed
async fn open_database(path: &Path) -> anyhow::Result<Database> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    Ok(Database::new_from_path(path).await?)
}

/// Build a controller from the global options
async fn controller(global: &GlobalArgs) -> anyhow::Result<CrawlController<Database>> {
    let db = open_database(&global.database).await?;
    let dictionary = Arc::new(KeywordDictionary::load(&global.keywords)?);

    let config = CrawlerConfig::builder()
        .user_agent(global.user_agent.clone())
        .timeout(Duration::from_secs(global.timeout_secs))
        .build();

    Ok(CrawlController::new(db, dictionary, config)?)
}

fn print_outcome(url: &str, outcome: &IndexOutcome) {
    match outcome {
        IndexOutcome::AlreadyIndexed => println!("{} is already indexed", url),
        IndexOutcome::FetchFailed(e) => println!("Could not fetch {}: {}", url, e),
        IndexOutcome::NoContent => println!("No text content found at {}", url),
        IndexOutcome::Indexed(page) => println!(
            "Indexed {} with ID {} ({} keywords)",
            page.url, page.web_id, page.keyword_count
        ),
    }
}

#[instrument(skip(global))]
async fn index_command(global: &GlobalArgs, args: UrlArgs) -> anyhow::Result<()> {
    let controller = controller(global).await?;
    let outcome = controller.index(&args.url).await?;
    print_outcome(&args.url, &outcome);
    Ok(())
}

#[instrument(skip(global))]
async fn crawl_command(global: &GlobalArgs, args: CrawlArgs) -> anyhow::Result<()> {
    println!("Crawling from {}...", args.url);

    let controller = controller(global).await?;
    let report = controller.crawl(&args.url).await?;

    for entry in &report.entries {
        match &entry.result {
            Ok(outcome) => print_outcome(&entry.url, outcome),
            Err(e) => println!("Failed to index {}: {}", entry.url, e),
        }
    }
    println!(
        "Indexed {} of {} pages",
        report.indexed_count(),
        report.entries.len()
    );
    Ok(())
}

#[instrument(skip(global))]
async fn search_command(global: &GlobalArgs, args: SearchArgs) -> anyhow::Result<()> {
    let controller = controller(global).await?;

    if !controller.store().exists(&args.url).await? {
        println!("{} not found in the index, indexing now...", args.url);
        let outcome = controller.index(&args.url).await?;
        print_outcome(&args.url, &outcome);
    }

    let options = SearchOptions {
        limit: args.limit,
        ..Default::default()
    };
    let related = search::related_pages(controller.store(), &args.url, &options).await?;

    println!("Results for: {}", args.url);
    if related.is_empty() {
        println!("No related pages found in this category.");
    }
    for (i, url) in related.iter().enumerate() {
        println!("{}. {}", i + 1, url);
    }
    Ok(())
}

#[instrument(skip(global))]
async fn show_command(global: &GlobalArgs, args: UrlArgs) -> anyhow::Result<()> {
    let db = open_database(&global.database).await?;
    let report = search::page_report(&db, &args.url, &SearchOptions::default()).await?;

    println!("URL: {}", report.url);
    println!("\nSummary:\n{}", report.summary);

    println!("\nTop keywords:");
    for keyword in &report.keywords {
        println!("  {} ({})", keyword.keyword, keyword.count);
    }

    println!("\nCategories:");
    for category in &report.categories {
        println!("  {} ({})", category.category, category.count);
    }
    Ok(())
}

#[instrument(skip(global))]
async fn recent_command(global: &GlobalArgs, args: RecentArgs) -> anyhow::Result<()> {
    let db = open_database(&global.database).await?;
    let urls = db.recent_urls(args.limit).await?;

    if urls.is_empty() {
        println!("No History");
    }
    for url in urls {
        println!("{}", url);
    }
    Ok(())
}

#[instrument(skip(global))]
async fn category_command(global: &GlobalArgs, args: CategoryArgs) -> anyhow::Result<()> {
    let db = open_database(&global.database).await?;
    let urls = search::pages_in_category(&db, &args.name).await?;

    println!("Pages in {}: {}", args.name, urls.len());
    for (i, url) in urls.iter().enumerate() {
        println!("{}. {}", i + 1, url);
    }
    Ok(())
}

#[instrument(skip(global))]
async fn export_command(global: &GlobalArgs, args: ExportArgs) -> anyhow::Result<()> {
    let db = open_database(&global.database).await?;
    let summary = db
        .get_summary(&args.url)
        .await?
        .unwrap_or_else(|| search::NO_SUMMARY.to_string());

    let path = search::export_summary(&args.output_dir, &args.url, &summary).await?;
    println!("Saved to {}", path.display());
    Ok(())
}

#[instrument(skip(global))]
async fn update_metadata_command(global: &GlobalArgs, args: UrlArgs) -> anyhow::Result<()> {
    let controller = controller(global).await?;

    match controller.refresh_metadata(&args.url).await? {
        MetadataRefresh::NotIndexed => println!("{} is not indexed", args.url),
        MetadataRefresh::FetchFailed(e) => println!("Could not fetch {}: {}", args.url, e),
        MetadataRefresh::Updated(n) => println!("Updated metadata for {} ({} records)", args.url, n),
    }
    Ok(())
}
