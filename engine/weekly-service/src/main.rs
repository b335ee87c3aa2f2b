use tracing::{error, info};
use weekly_service::{WeeklyConfig, WeeklyService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let pipeline = std::env::args().nth(1).unwrap_or_else(|| "post-game".to_string());

    info!("Starting Weekly Pipeline Service ({pipeline})");

    let config = WeeklyConfig::from_env()?;
    let service = WeeklyService::new(config)?;

    let event = match pipeline.as_str() {
        "post-game" => service.run_post_game().await?,
        "pre-game" => service.run_pre_game().await?,
        other => {
            error!("unknown pipeline: {other} (expected post-game or pre-game)");
            anyhow::bail!("unknown pipeline: {other}");
        }
    };

    info!("pipeline finished: {event:?}");
    Ok(())
}
