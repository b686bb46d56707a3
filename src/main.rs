//! CLI entry point for starlog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use starlog::cms::{CmsClient, PostSource};
use starlog::helpers;

#[derive(Parser)]
#[command(name = "starlog")]
#[command(version = "0.1.0")]
#[command(about = "A server-rendered blog front-end for a headless CMS", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the blog server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (overrides the configuration)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (overrides the configuration)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// Fetch and print the first listing page
    List,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "starlog=debug,info"
    } else {
        "starlog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let app = starlog::Starlog::new(&base_dir)?;

    match cli.command {
        Commands::Serve { port, ip } => {
            let ip = ip.unwrap_or_else(|| app.config.server.ip.clone());
            let port = port.unwrap_or(app.config.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            starlog::server::start(&app, &ip, port).await?;
        }

        Commands::List => {
            let client = CmsClient::new(app.config.api.clone());
            let page = client.list_posts(app.config.api.page_size).await?;

            println!("Posts ({}):", page.results.len());
            for post in &page.results {
                println!(
                    "  {} - {} [{}]",
                    helpers::display_date(post.first_publication_date.as_ref()),
                    post.data.title,
                    post.uid
                );
            }
            if page.next_page.is_some() {
                println!("More posts available.");
            }
        }

        Commands::Version => {
            println!("starlog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
