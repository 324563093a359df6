use taggr_reddit_bot::config::Config;
use taggr_reddit_bot::poller;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let result = match Config::load() {
        Ok(config) => poller::run(&config).await,
        Err(err) => Err(err),
    };

    // The scheduler only sees the exit code; cron retries on the next tick.
    if let Err(err) = result {
        error!("{}", err);
        std::process::exit(1);
    }
}
