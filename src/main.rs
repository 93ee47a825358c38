//! ghteams - main entry point

use clap::Parser;
use log::{debug, info};

use ghteams::{run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting ghteams v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: org_name={:?}, api_url={}, batch={}, token_provided={}",
        cli.org_name,
        cli.api_url,
        cli.batch,
        cli.token.is_some()
    );

    let mut stdout = std::io::stdout();
    if let Err(e) = run(&cli, &mut stdout).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
