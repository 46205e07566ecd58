//! Pokedex - An interactive shell over a remote creature catalog
//!
//! Browses location areas, explores their encounters and catches creatures,
//! with responses kept in an expiring in-memory cache.

use std::io;

use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{
    spawn_reaper_task, CatalogClient, CommandRegistry, Config, ExpiringCache, Fetcher, Repl,
    ReplExit, Session,
};

/// Main entry point for the Pokedex shell.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber (stderr, so logs stay out of the REPL)
/// 2. Load configuration from environment variables
/// 3. Create the response cache and start its reaper
/// 4. Build the session and command registry
/// 5. Run the REPL on stdin until `exit` or end of input
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to warnings only, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: api_url={}, cache_ttl={}s",
        config.api_url, config.cache_ttl
    );

    let cache = ExpiringCache::new(config.cache_ttl());
    // Runs until the process exits
    let _reaper = spawn_reaper_task(cache.clone());

    let fetcher = Fetcher::new(cache, CatalogClient::new(config.api_url.clone()));
    let mut repl = Repl::new(CommandRegistry::new(), Session::new(fetcher), config.prompt);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();

    match repl.run(stdin, &mut stdout).await? {
        ReplExit::Command => std::process::exit(0),
        ReplExit::EndOfInput => {
            info!("Input closed, leaving the Pokedex");
            Ok(())
        }
    }
}
