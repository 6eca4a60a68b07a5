//! Policy Cache - An in-memory key-value cache
//!
//! Runs an interactive cache session over stdin/stdout.

use tokio::io::{stdin, stdout, BufReader};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use policy_cache::shell::run_session;
use policy_cache::{Cache, Config, SharedCache};

/// Main entry point for the cache shell.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the cache with the configured policy
/// 4. Serve commands from stdin until EOF, `quit` or Ctrl+C
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "policy_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Policy Cache shell");

    let config = Config::from_env();
    info!(
        "Configuration loaded: policy={}, max_items={}",
        config.policy, config.max_items
    );

    let cache: SharedCache<String, String> = SharedCache::new(Cache::from_config(&config)?);
    info!("Cache initialized");

    tokio::select! {
        result = run_session(BufReader::new(stdin()), stdout(), &cache) => {
            result?;
            info!("Input closed, shutting down");
        }
        _ = signal::ctrl_c() => {
            warn!("Received Ctrl+C, shutting down");
        }
    }

    let stats = cache.stats().await;
    info!(
        "Final stats: entries={}, hits={}, misses={}, evictions={}, rejected={}",
        stats.total_entries, stats.hits, stats.misses, stats.evictions, stats.rejected
    );
    Ok(())
}
