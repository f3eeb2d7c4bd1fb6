use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use signpost::core::config;
use signpost::tui;

#[derive(Parser)]
#[command(name = "signpost", about = "Terminal browser for community resource directories")]
struct Args {
    /// URL of a JSON resource feed to load on startup
    #[arg(short, long)]
    source: Option<String>,

    /// Local JSON file to load instead of fetching over HTTP
    #[arg(short, long)]
    data: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to signpost.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("signpost.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Config unusable ({e}), falling back to defaults");
        config::SignpostConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        args.source.as_deref(),
        args.data.as_deref(),
    );

    log::info!("Signpost starting up, source: {:?}", resolved.source);

    tui::run(resolved)
}
