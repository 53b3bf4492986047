use anyhow::{Context, Result, anyhow};
use catalog::{HttpVenueSource, JsonFileSource, VenueRecord};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use facets::{CAPACITY_BUCKETS, Category, PriceBound};
use session::{BrowseEvent, BrowseSession};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Venue Browse - filter a venue catalog by category, capacity and price
#[derive(Parser)]
#[command(name = "venue-browse")]
#[command(about = "Browse and filter venues from the booking API", long_about = None)]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// Read the venue catalog from a JSON file (takes precedence over --api-url)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Booking API base URL (venues are fetched from `<url>/venues`)
    #[arg(long, env = "VENUE_API_URL", global = true)]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List venues passing the given filters
    List {
        /// Event category to include (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,

        /// Capacity bucket label to include, e.g. "50-100" (repeatable)
        #[arg(long = "capacity")]
        capacities: Vec<String>,

        /// Minimum price per day
        #[arg(long)]
        min_price: Option<f64>,

        /// Maximum price per day
        #[arg(long)]
        max_price: Option<f64>,
    },

    /// Show one venue's details
    Show {
        /// Venue ID to display
        #[arg(long)]
        id: String,
    },

    /// Print the selectable categories and capacity buckets
    Facets,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        // Facet definitions are static; no catalog needed
        Commands::Facets => print_facets(),
        Commands::List {
            categories,
            capacities,
            min_price,
            max_price,
        } => {
            let session = load_session(&cli.source).await?;
            handle_list(session, categories, capacities, min_price, max_price)?
        }
        Commands::Show { id } => {
            let session = load_session(&cli.source).await?;
            handle_show(&session, &id)?
        }
    }

    Ok(())
}

/// Enter a browsing session and load its catalog from the chosen source
async fn load_session(source: &SourceArgs) -> Result<BrowseSession> {
    let mut session = BrowseSession::new();
    let start = Instant::now();

    let count = match (&source.file, &source.api_url) {
        (Some(path), _) => session
            .load(&JsonFileSource::new(path))
            .await
            .with_context(|| format!("Failed to load venues from {}", path.display()))?,
        (None, Some(url)) => {
            let api = HttpVenueSource::new(url.as_str())?;
            session
                .load(&api)
                .await
                .with_context(|| format!("Failed to load venues from {}", api.venues_url()))?
        }
        (None, None) => {
            return Err(anyhow!(
                "No venue source given: pass --file <path> or --api-url <url> (or set VENUE_API_URL)"
            ));
        }
    };

    info!("Loaded {} venues in {:?}", count, start.elapsed());
    Ok(session)
}

/// Handle the 'list' command
fn handle_list(
    mut session: BrowseSession,
    categories: Vec<String>,
    capacities: Vec<String>,
    min_price: Option<f64>,
    max_price: Option<f64>,
) -> Result<()> {
    // Replay the flags as the same events a browsing screen would send
    let events = categories
        .into_iter()
        .map(|tag| BrowseEvent::ToggleCategory { tag, included: true })
        .chain(
            capacities
                .into_iter()
                .map(|label| BrowseEvent::ToggleCapacity { label, included: true }),
        )
        .chain(min_price.map(|value| BrowseEvent::SetPriceBound {
            which: PriceBound::Min,
            value: Some(value),
        }))
        .chain(max_price.map(|value| BrowseEvent::SetPriceBound {
            which: PriceBound::Max,
            value: Some(value),
        }));

    for event in events {
        session
            .handle(event.clone())
            .with_context(|| format!("Rejected filter {:?}", event))?;
    }

    let visible = session.visible();
    println!(
        "{}",
        format!(
            "{} of {} venues match",
            visible.len(),
            session.catalog().len()
        )
        .bold()
        .blue()
    );
    for venue in visible {
        print_venue_line(venue);
    }
    Ok(())
}

/// Handle the 'show' command
fn handle_show(session: &BrowseSession, id: &str) -> Result<()> {
    let venue = session
        .venue(id)
        .ok_or_else(|| anyhow!("Venue {} not found", id))?;

    println!("{}", venue.display_name().bold().blue());
    println!("{}ID: {}", "• ".green(), venue.id);
    println!("{}Category: {}", "• ".green(), or_unknown(venue.category.as_deref()));
    println!(
        "{}Capacity: {}",
        "• ".green(),
        venue
            .capacity
            .map(|c| format!("{} guests", c))
            .unwrap_or_else(|| "unknown".to_string())
    );
    println!(
        "{}Price: {}",
        "• ".green(),
        venue
            .price
            .map(|p| format!("{:.2} per day", p))
            .unwrap_or_else(|| "unknown".to_string())
    );
    println!("{}Location: {}", "• ".cyan(), or_unknown(venue.location.as_deref()));
    if !venue.images.is_empty() {
        println!("{}Images:", "• ".cyan());
        for image in &venue.images {
            println!("  - {}", image);
        }
    }
    Ok(())
}

/// Print the fixed facet definitions
fn print_facets() {
    println!("{}", "Categories:".bold().blue());
    for category in Category::ALL {
        println!("  - {}", category);
    }
    println!("{}", "Capacity buckets:".bold().blue());
    for bucket in &CAPACITY_BUCKETS {
        println!("  - {:<14} {}", bucket.label, bucket.bounds);
    }
}

fn print_venue_line(venue: &VenueRecord) {
    let capacity = venue
        .capacity
        .map(|c| c.to_string())
        .unwrap_or_else(|| "?".to_string());
    let price = venue
        .price
        .map(|p| format!("{:.2}", p))
        .unwrap_or_else(|| "?".to_string());

    println!(
        "{} {} [{}] {} guests, {} per day{}",
        venue.id.green(),
        venue.display_name(),
        or_unknown(venue.category.as_deref()),
        capacity,
        price,
        venue
            .location
            .as_deref()
            .map(|l| format!(" ({})", l))
            .unwrap_or_default()
    );
}

fn or_unknown(value: Option<&str>) -> &str {
    value.unwrap_or("unknown")
}
