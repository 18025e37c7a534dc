use clap::Parser;
use terkode::{arguments::Cli, display, run};

/// Entry point for the terkode CLI
///
/// Any error returned by a command is printed as one line and exits with
/// status 1. Watch mode returns normally after Ctrl-C and exits 0.
#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run::run(cli).await {
        display::print_error(&format!("❌ {:#}", e));
        std::process::exit(1);
    }
}
