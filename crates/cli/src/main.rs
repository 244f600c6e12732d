use anyhow::{Context, Result};
use catalog::{CatalogController, LoadOutcome};
use catalog_model::{CatalogItem, ItemId};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::{GenreFilter, SortKey, ViewState};
use sources::{CatalogApi, ClientConfig, HttpCatalogApi};
use std::time::{Duration, Instant};
use tracing::info;

/// ReelBrowse - Movie catalog browser
#[derive(Parser)]
#[command(name = "reel-browse")]
#[command(about = "Browse the movie and video catalog from the terminal", long_about = None)]
struct Cli {
    /// Base URL of the catalog backend
    #[arg(long, env = "REEL_API_URL", default_value = sources::config::DEFAULT_BASE_URL)]
    api_url: String,

    /// Records requested per page
    #[arg(long, env = "REEL_PAGE_SIZE", default_value = "10")]
    page_size: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "10")]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the catalog and print the filtered, sorted list
    Browse {
        /// Case-insensitive text matched against title and description
        #[arg(long, default_value = "")]
        query: String,

        /// Genre name, or "all"
        #[arg(long, default_value = "all")]
        genre: GenreFilter,

        /// newest | popular | title | year
        #[arg(long, default_value = "newest")]
        sort: SortKey,

        /// How many pages to load ("load more" after the first)
        #[arg(long, default_value = "1")]
        pages: u32,
    },

    /// List the genres known to the backend
    Genres,

    /// Record a view for a movie
    View {
        #[arg(long)]
        id: ItemId,
    },

    /// Record a like for a movie
    Like {
        #[arg(long)]
        id: ItemId,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = ClientConfig::new(cli.api_url)
        .with_page_size(cli.page_size)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    let api = HttpCatalogApi::new(&config).context("Failed to build HTTP client")?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Browse {
            query,
            genre,
            sort,
            pages,
        } => {
            let view = ViewState::new()
                .with_query(query)
                .with_genre(genre)
                .with_sort(sort);
            handle_browse(api, config.page_size, view, pages).await?
        }
        Commands::Genres => handle_genres(api).await?,
        Commands::View { id } => {
            api.record_view(id)
                .await
                .with_context(|| format!("Failed to record view for {}", id))?;
            println!("{} View recorded for {}", "✓".green(), id);
        }
        Commands::Like { id } => {
            api.record_like(id)
                .await
                .with_context(|| format!("Failed to record like for {}", id))?;
            println!("{} Like recorded for {}", "✓".green(), id);
        }
    }

    Ok(())
}

/// Handle the 'browse' command
async fn handle_browse(api: HttpCatalogApi, page_size: u32, view: ViewState, pages: u32) -> Result<()> {
    let controller = CatalogController::new(api, page_size);
    let start = Instant::now();

    controller
        .load_initial()
        .await
        .context("Failed to load the catalog")?;

    for _ in 1..pages {
        match controller.load_more().await.context("Failed to load more")? {
            LoadOutcome::Loaded { added } => info!("Loaded {} more items", added),
            LoadOutcome::Skipped(reason) => {
                info!("Stopped paging: {:?}", reason);
                break;
            }
            LoadOutcome::Stale => break,
        }
    }

    let snapshot = controller.snapshot().await;
    println!(
        "{} Loaded {} items across {} page(s) in {:?}",
        "✓".green(),
        snapshot.items.len(),
        snapshot.page.page + 1,
        start.elapsed()
    );

    let visible = controller.visible(&view).await;
    print_items(&visible, &view);
    Ok(())
}

/// Handle the 'genres' command
async fn handle_genres(api: HttpCatalogApi) -> Result<()> {
    let genres = api.fetch_genres().await.context("Failed to load genres")?;

    println!("{}", "Genres:".bold().blue());
    for genre in genres {
        println!("  - {} ({})", genre.name, genre.id);
    }
    Ok(())
}

/// Helper function to format and print the displayed list
fn print_items(items: &[CatalogItem], view: &ViewState) {
    println!(
        "{}",
        format!(
            "Catalog (query: '{}', genre: {}, sort: {}):",
            view.query, view.genre, view.sort
        )
        .bold()
        .blue()
    );
    if items.is_empty() {
        println!("  Nothing to show.");
        return;
    }

    for (rank, item) in items.iter().enumerate() {
        let rank = (rank + 1).to_string().green();
        match item {
            CatalogItem::Movie(movie) => println!(
                "{}. {} ({}) [{}] - {} views, {} likes  #{}",
                rank,
                movie.title,
                movie
                    .year
                    .map(|y| y.to_string())
                    .unwrap_or_else(|| "????".to_string()),
                movie.genres.join(", "),
                movie.views,
                movie.likes,
                movie.id
            ),
            CatalogItem::VideoOnly(video) => println!(
                "{}. {} {}  #{}",
                rank,
                video.title,
                "(video only)".dimmed(),
                video.id
            ),
        }
    }
}
