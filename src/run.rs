/// Command dispatch
///
/// Loads configuration, wires the resolver and watchlist, then runs the flow
/// for the parsed subcommand. Failures bubble up as `anyhow` errors whose
/// top-level message is the single line shown to the user.
use crate::arguments::{Cli, Command, WatchlistArgs};
use crate::config::{load_config, Config};
use crate::display;
use crate::logger::{self, LogTag};
use crate::monitor;
use crate::paths;
use crate::shutdown::install_ctrlc_handler;
use crate::tokens::{build_resolver, build_trending_source, fetch_trending, resolve_all, Resolver};
use crate::watchlist::WatchlistStore;
use anyhow::{Context, Result};
use std::sync::Arc;

pub async fn run(cli: Cli) -> Result<()> {
    // Console-only until the config says whether to mirror into a file
    logger::init(cli.logger_config(false), None);

    let config_path = cli.config.clone().unwrap_or_else(paths::get_config_path);
    let config = load_config(&config_path).context("Failed to load configuration")?;

    let logs_dir = paths::get_logs_directory();
    logger::init(
        cli.logger_config(config.logging.file_logging),
        Some(&logs_dir),
    );

    if !cli.no_banner {
        display::print_banner();
    }

    logger::debug(
        LogTag::System,
        &format!("terkode {} starting", env!("CARGO_PKG_VERSION")),
    );

    let result = dispatch(&cli, &config).await;
    logger::flush();
    result
}

async fn dispatch(cli: &Cli, config: &Config) -> Result<()> {
    match &cli.command {
        Command::Get { address, watch } => {
            let resolver = build_resolver(config).context("Failed to set up providers")?;
            if *watch {
                watch_token(Arc::new(resolver), address, config).await
            } else {
                get_token(&resolver, address).await
            }
        }
        Command::Watchlist(args) => {
            let store = WatchlistStore::new(
                cli.watchlist.clone().unwrap_or_else(|| config.watchlist_path()),
            );
            manage_watchlist(&store, args, config).await
        }
        Command::Search { query } => {
            display::print_search_stub(query);
            Ok(())
        }
        Command::Trending { limit } => show_trending(config, *limit).await,
    }
}

async fn get_token(resolver: &Resolver, address: &str) -> Result<()> {
    let record = resolver.resolve(address).await?;
    display::print_token(&record);
    Ok(())
}

async fn watch_token(resolver: Arc<Resolver>, address: &str, config: &Config) -> Result<()> {
    let period = config.refresh_interval();
    let error_address = address.to_string();

    let task = monitor::start(
        resolver,
        address.to_string(),
        period,
        move |record| display::print_watch_frame(&record, period),
        move |error| display::print_watch_error(&error_address, &error),
    );

    install_ctrlc_handler(task.cancellation_handle())
        .context("Failed to install Ctrl-C handler")?;

    task.join().await;
    display::print_watch_stopped();
    Ok(())
}

async fn manage_watchlist(store: &WatchlistStore, args: &WatchlistArgs, config: &Config) -> Result<()> {
    if let Some(address) = &args.add {
        let added = store
            .add(address.trim())
            .context("Error managing watchlist")?;
        display::print_watchlist_added(address.trim(), added);
        return Ok(());
    }

    if let Some(address) = &args.remove {
        let removed = store
            .remove(address.trim())
            .context("Error managing watchlist")?;
        display::print_watchlist_removed(address.trim(), removed);
        return Ok(());
    }

    let addresses = store.load();
    if addresses.is_empty() {
        display::print_watchlist_empty();
        return Ok(());
    }

    let resolver = build_resolver(config).context("Failed to set up providers")?;
    display::print_watchlist_header(addresses.len());

    for (address, outcome) in resolve_all(&resolver, &addresses).await {
        match outcome {
            Ok(record) => display::print_token(&record),
            Err(e) => display::print_error(&format!(
                "❌ Error fetching data for {}: {}",
                address, e
            )),
        }
    }
    Ok(())
}

async fn show_trending(config: &Config, limit: usize) -> Result<()> {
    let source = build_trending_source(config).context("Failed to set up DexScreener")?;
    let resolver = build_resolver(config).context("Failed to set up providers")?;

    let records = fetch_trending(&source, &resolver, limit)
        .await
        .context("Error fetching trending tokens")?;

    display::print_trending(&records);
    Ok(())
}
