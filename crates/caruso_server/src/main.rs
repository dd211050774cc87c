use anyhow::Result;
use caruso_models::{ElevenLabsSynthesizer, FirecrawlClient, GeminiScriptWriter};
use caruso_pipeline::PodcastPipeline;
use caruso_server::{create_router, AppState, ServerConfig};
use caruso_storage::{ArtifactStore, JsonLedger};
use clap::Parser;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Caruso blog-to-podcast server", long_about = None)]
struct Args {
    /// Port to listen on (overrides CARUSO_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory for generated audio files (overrides CARUSO_AUDIO_DIR)
    #[arg(long)]
    audio_dir: Option<String>,

    /// Path of the metadata ledger file (overrides CARUSO_LEDGER_PATH)
    #[arg(long)]
    ledger: Option<String>,

    /// Maximum number of audio files to retain (overrides CARUSO_RETENTION)
    #[arg(long)]
    capacity: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(audio_dir) = args.audio_dir {
        config.audio_dir = audio_dir.into();
    }
    if let Some(ledger) = args.ledger {
        config.ledger_path = ledger.into();
    }
    if let Some(capacity) = args.capacity {
        config.capacity = capacity;
    }

    info!(
        port = config.port,
        audio_dir = %config.audio_dir.display(),
        ledger = %config.ledger_path.display(),
        capacity = config.capacity,
        "Starting Caruso server"
    );

    let ledger = JsonLedger::new(&config.ledger_path);
    let store = Arc::new(ArtifactStore::new(
        Box::new(ledger),
        &config.audio_dir,
        config.capacity,
    )?);

    let pipeline = Arc::new(PodcastPipeline::new(
        Arc::new(FirecrawlClient::from_env()),
        Arc::new(GeminiScriptWriter::from_env()),
        Arc::new(ElevenLabsSynthesizer::from_env()),
        store.clone(),
    ));

    let app = create_router(AppState::new(pipeline, store));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, app).await?;

    Ok(())
}
