/// Dancefloor - fetch a user's most danceable songs and print them as a table
use clap::Parser;
use dancefloor_pipeline::{DancePipeline, PipelineConfig, DEFAULT_GROUP_CAPACITY};
use dancefloor_server_client::{ClientConfig, DancefloorClient};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod render;

#[derive(Parser)]
#[command(name = "dancefloor")]
#[command(about = "Fetch your dance songs from a dance server", long_about = None)]
struct Cli {
    /// Base URL of the dance server
    #[arg(short, long, env = "DANCEFLOOR_SERVER_URL")]
    server_url: String,

    /// Maximum combined track total per playlist-items request
    #[arg(long, default_value_t = DEFAULT_GROUP_CAPACITY)]
    capacity: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dancefloor=info,dancefloor_pipeline=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let client = DancefloorClient::new(ClientConfig::new(&cli.server_url))?;
    let pipeline = DancePipeline::new(
        client,
        PipelineConfig {
            group_capacity: cli.capacity,
        },
    );

    match pipeline.run().await {
        Ok(outcome) => {
            if outcome.summary.playlists == 0 {
                println!("No playlists available for this user.");
                return Ok(());
            }

            print!("{}", render::table(&outcome.dance_songs));
            info!(
                dance_songs = outcome.summary.dance_songs,
                duration_seconds = outcome.summary.duration_seconds,
                "Retrieved your dance songs"
            );
            Ok(())
        }
        Err(e) => {
            error!(stage = ?e.stage(), error = %e, "Pipeline failed");
            eprintln!("Failed to retrieve dance songs: {e}");
            std::process::exit(1);
        }
    }
}
