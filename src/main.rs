use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cpb_logbook::assets::AssetLoader;
use cpb_logbook::client::LogbookClient;
use cpb_logbook::config::{self, LogbookConfig};
use cpb_logbook::models::Phase;
use cpb_logbook::{api, render};

#[derive(Parser)]
#[command(name = "logbook")]
#[command(about = "Laboratory logbook for the cocoa pod borer genome workflow")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the logbook server
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// Port for HTTP
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory holding the downloadable scripts
        #[arg(short, long)]
        assets: Option<PathBuf>,
    },
    /// List the logbook phases
    Phases,
    /// Print one phase as plain text
    Show {
        /// Phase slug (sequence, structure, docking, notes)
        slug: String,
    },
    /// Check whether a server is running
    Status {
        /// Server URL (defaults to LOGBOOK_URL or the configured address)
        #[arg(long)]
        url: Option<String>,
    },
    /// Print the effective configuration
    Config {
        /// Write the file-backed settings (without LOGBOOK_* overrides) to the user config file
        #[arg(long)]
        save: bool,
    },
}

/// Initialize tracing with output to stderr so `show` and `phases` keep
/// stdout clean.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "cpb_logbook=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn serve(config: LogbookConfig) -> anyhow::Result<()> {
    let loader = AssetLoader::new(&config.asset_root);
    tracing::info!(
        assets = %loader.root().display(),
        "Starting logbook server on {}",
        config.bind_addr()
    );

    let app = api::create_router(api::AppState::new(loader));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Logbook listening on http://{}", config.bind_addr());

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = LogbookConfig::load();

    match cli.command {
        Some(Commands::Serve { host, port, assets }) => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(assets) = assets {
                config.asset_root = assets;
            }
            serve(config).await?;
        }
        Some(Commands::Phases) => {
            for phase in Phase::ALL {
                println!("{:<10} {}", phase.slug(), phase.label());
            }
        }
        Some(Commands::Show { slug }) => {
            let phase = Phase::from_slug(&slug)
                .ok_or_else(|| anyhow::anyhow!("Unknown phase '{}'. Try `logbook phases`.", slug))?;
            print!("{}", render::text::phase(phase));
        }
        Some(Commands::Status { url }) => {
            let url = url
                .or_else(|| std::env::var("LOGBOOK_URL").ok())
                .unwrap_or_else(|| format!("http://{}", config.bind_addr()));
            let client = LogbookClient::new(&url);
            match client.health().await {
                Ok(status) => {
                    let selection = client.selection().await?;
                    println!("Logbook at {} is {} (showing {})", url, status, selection.label);
                }
                Err(e) => {
                    println!("Logbook at {} is not reachable: {}", url, e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Config { save }) => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            if save {
                // environment overrides stay out of the file
                LogbookConfig::load_file().save()?;
                println!("Saved to {}", config::get_config_path()?.display());
            }
        }
        None => serve(config).await?,
    }

    Ok(())
}
