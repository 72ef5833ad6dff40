use std::io::Read;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cloud_architect::{
    api,
    config::Config,
    generator::{build_recommender, GenerationOutcome},
    models::{HealthResponse, ProjectDescription},
};

#[derive(Parser)]
#[command(name = "cloud-architect")]
#[command(about = "Google Cloud architecture recommendations for your project")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port for HTTP API
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
    /// Generate one recommendation and print it (reads stdin if no description is given)
    Generate {
        /// Free-text project description
        description: Option<String>,
    },
    /// Print configuration status as JSON
    Health,
}

/// Initialize tracing with output to stderr (for one-shot commands) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "cloud_architect=debug,tower_http=debug".into()),
    );

    if use_stderr {
        // Keep stdout clean for the recommendation text
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn serve(config: &Config, host: &str, port: u16) -> anyhow::Result<()> {
    tracing::info!("Starting Cloud Architect server on port {}", port);

    let state = api::AppState::from_config(config).context("Failed to build Gemini client")?;
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Cloud Architect listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn generate_once(config: &Config, description: Option<String>) -> anyhow::Result<()> {
    let raw = match description {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read description from stdin")?;
            buf
        }
    };

    let description = ProjectDescription::parse(&raw)?;
    let recommender = build_recommender(config).context("Failed to build Gemini client")?;

    let outcome = tokio::time::timeout(
        config.generation_timeout,
        recommender.recommend(&description),
    )
    .await
    .context("Generation exceeded its time budget")?;

    match outcome {
        GenerationOutcome::Success(text) => {
            println!("{}", text);
            Ok(())
        }
        GenerationOutcome::Failure { message, .. } => anyhow::bail!(message),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env values take precedence over the inherited environment
    dotenvy::dotenv_override().ok();

    let cli = Cli::parse();

    let use_stderr = !matches!(cli.command, None | Some(Commands::Serve { .. }));
    init_tracing(use_stderr);

    let config = Config::from_env();
    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Some(Commands::Serve { host, port }) => serve(&config, &host, port).await?,
        Some(Commands::Generate { description }) => generate_once(&config, description).await?,
        Some(Commands::Health) => {
            let health = HealthResponse::ok(config.gemini_configured(), config.demo_mode);
            println!("{}", serde_json::to_string_pretty(&health)?);
        }
        None => serve(&config, "0.0.0.0", 8080).await?,
    }

    Ok(())
}
