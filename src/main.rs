use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use project_graph::catalog::Catalog;
use project_graph::config::GraphConfig;
use project_graph::graph::{self, HttpGraphClient, RecordingGraphClient};
use project_graph::render;

#[derive(Parser)]
#[command(name = "pgraph")]
#[command(about = "Project structure records for a knowledge graph")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the project, its features and components
    Show {
        /// JSON catalog file (defaults to the bundled AgentForge example)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
    /// Print the internal depends_on edges between components
    Edges {
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
    /// Write the catalog to the knowledge graph store
    Populate {
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Record calls in memory instead of sending them
        #[arg(long)]
        dry_run: bool,

        /// Base URL of the graph store API
        #[arg(long)]
        url: Option<String>,

        /// API key for the graph store
        #[arg(long)]
        api_key: Option<String>,
    },
}

/// Initialize tracing on stderr so stdout carries only the console output.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "project_graph=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_catalog(path: Option<&PathBuf>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display())),
        None => Catalog::agentforge().context("Bundled catalog is invalid"),
    }
}

fn show(path: Option<&PathBuf>) -> anyhow::Result<()> {
    let catalog = load_catalog(path)?;
    print!("{}", render::render_report(&catalog));
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Show { catalog }) => show(catalog.as_ref())?,
        Some(Commands::Edges { catalog }) => {
            let catalog = load_catalog(catalog.as_ref())?;
            let edges = graph::project_dependencies(catalog.components());
            print!("{}", render::render_edges(&edges));
        }
        Some(Commands::Populate {
            catalog,
            dry_run,
            url,
            api_key,
        }) => {
            let catalog = load_catalog(catalog.as_ref())?;

            if dry_run {
                let client = RecordingGraphClient::new();
                let report = graph::populate_catalog(&client, &catalog).await?;
                print!("{}", render::render_calls(&client.calls()));
                println!(
                    "Dry run {}: {} entities, {} relationships",
                    report.run_id,
                    report.entities,
                    report.relationships()
                );
            } else {
                let config = GraphConfig::load().apply_env().with_overrides(url, api_key);
                let client = HttpGraphClient::from_config(&config);
                tracing::info!("Using graph store at {}", client.base_url());

                let report = graph::populate_catalog(&client, &catalog)
                    .await
                    .context("Population aborted")?;
                println!(
                    "Populated {}: {} entities, {} relationships",
                    catalog.project().name(),
                    report.entities,
                    report.relationships()
                );
            }
        }
        None => show(None)?,
    }

    Ok(())
}
