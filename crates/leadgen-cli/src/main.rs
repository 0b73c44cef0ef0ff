use clap::{Parser, Subcommand};
use leadgen_core::DetailOutcome;
use leadgen_pipeline::LeadPipeline;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "leadgen")]
#[command(about = "Find businesses and enrich them into contactable leads")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the id of the best-matching place
    Find {
        /// Free-text search query
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Fetch one place's details and scrape its website for emails
    Details {
        /// Provider place identifier
        place_id: String,
    },
    /// List search hits without fetching details
    Search {
        /// Free-text search query
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        /// Maximum number of results (0 or absent means 20)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Search, then fetch details and emails for every hit
    Enrich {
        /// Free-text search query
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        /// Maximum number of places to enrich (0 or absent means 20)
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[derive(Debug, Serialize)]
struct FindOutput {
    place_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct ResultsOutput<T> {
    results: Vec<T>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = leadgen_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    // stdout carries the JSON result; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let pipeline = LeadPipeline::from_app_config(&config)?;
    run(&pipeline, cli.command).await
}

async fn run(pipeline: &LeadPipeline, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Find { query } => {
            let place_id = pipeline.find_place(&query.join(" ")).await?;
            print_json(&FindOutput { place_id })
        }
        Commands::Details { place_id } => match pipeline.fetch_details(&place_id).await? {
            DetailOutcome::Found(details) => print_json(&details),
            DetailOutcome::Failed {
                place_id,
                error_message,
            } => anyhow::bail!("failed to fetch details for {place_id}: {error_message}"),
        },
        Commands::Search { query, limit } => {
            let results = pipeline.search_text(&query.join(" "), limit).await?;
            print_json(&ResultsOutput { results })
        }
        Commands::Enrich { query, limit } => {
            let results = pipeline.enrich(&query.join(" "), limit).await?;
            let failed = results.iter().filter(|lead| lead.is_error()).count();
            if failed > 0 {
                tracing::warn!(
                    failed,
                    total = results.len(),
                    "some places could not be enriched"
                );
            }
            print_json(&ResultsOutput { results })
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
