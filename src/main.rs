use clap::Parser;
use scribe::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "scribe", about = "Terminal client for an AI article writer", version)]
struct Args {
    /// Base URL of the article generation backend
    #[arg(short, long)]
    base_url: Option<String>,

    /// Page to open on startup (e.g. /services)
    #[arg(short, long)]
    path: Option<String>,

    /// Skip the startup backend health probe
    #[arg(long)]
    no_health_check: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to scribe.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("scribe.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().map_err(std::io::Error::other)?;
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url,
            initial_path: args.path,
            no_health_check: args.no_health_check,
        },
    );

    log::info!(
        "Scribe starting up (backend: {}, initial path: {})",
        resolved.base_url,
        resolved.initial_path
    );

    scribe::tui::run(resolved)
}
