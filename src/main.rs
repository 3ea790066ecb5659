use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use shoplist::core::config::{self, CliOverrides};
use shoplist::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "shoplist", about = "Browse purchasable items from a Firestore collection")]
struct Args {
    /// Firestore project id
    #[arg(short, long)]
    project: Option<String>,

    /// Collection holding the item documents
    #[arg(short, long)]
    collection: Option<String>,

    /// Firestore REST base URL (e.g. a local emulator)
    #[arg(long)]
    base_url: Option<String>,

    /// Where to write the debug log
    #[arg(long, default_value = "shoplist.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("shoplist starting up");

    let file_config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load config: {}", e);
            eprintln!("shoplist: {e}");
            return Err(std::io::Error::other(e));
        }
    };

    let cli = CliOverrides {
        project_id: args.project,
        collection: args.collection,
        base_url: args.base_url,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::info!(
        "Using project '{}', collection '{}' at {}",
        resolved.project_id,
        resolved.collection,
        resolved.base_url
    );

    tui::run(resolved)
}
