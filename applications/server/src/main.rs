/// Phasebook Server - user directory search over HTTP
use clap::{Args, Parser, Subcommand};
use phasebook_core::SearchParams;
use phasebook_server::{config::ServerConfig, create_router, state::AppState};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "phasebook-server")]
#[command(about = "Phasebook user directory search server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "PHASEBOOK_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Run a single search and print the result as JSON
    Search {
        #[command(flatten)]
        query: QueryArgs,
        /// Configuration file path
        #[arg(short, long, env = "PHASEBOOK_CONFIG")]
        config: Option<PathBuf>,
    },
    /// List all users, sorted by id
    ListUsers {
        /// Configuration file path
        #[arg(short, long, env = "PHASEBOOK_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[derive(Args)]
struct QueryArgs {
    /// Exact user id
    #[arg(long)]
    id: Option<String>,
    /// Name fragment (case-insensitive)
    #[arg(long)]
    name: Option<String>,
    /// Age; matches users within one year
    #[arg(long)]
    age: Option<String>,
    /// Occupation fragment (case-insensitive)
    #[arg(long)]
    occupation: Option<String>,
}

impl From<QueryArgs> for SearchParams {
    fn from(args: QueryArgs) -> Self {
        SearchParams {
            id: args.id,
            name: args.name,
            age: args.age,
            occupation: args.occupation,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phasebook_server=info,phasebook_core=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::Search { query, config } => {
            search(query.into(), config)?;
        }
        Commands::ListUsers { config } => {
            list_users(config)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<ServerConfig> {
    let config = ServerConfig::load_from(path.as_deref())?;
    config.validate()?;
    Ok(config)
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Load configuration
    let config = load_config(config_path)?;

    tracing::info!("Starting Phasebook Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Load the directory once; it stays read-only for the process lifetime
    let dataset = Arc::new(config.dataset()?);
    tracing::info!("Dataset ready with {} users", dataset.len());

    // Build application state
    let app_state = AppState::new(dataset);

    // Build router
    let app = create_router(app_state);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

fn search(params: SearchParams, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let dataset = config.dataset()?;

    let users = dataset.search(&params);
    println!("{}", serde_json::to_string_pretty(&users)?);

    Ok(())
}

fn list_users(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let dataset = config.dataset()?;

    println!("Users:");
    for user in dataset.search(&SearchParams::new()) {
        println!(
            "  {} - {} ({}, {})",
            user.id, user.name, user.age, user.occupation
        );
    }

    Ok(())
}
