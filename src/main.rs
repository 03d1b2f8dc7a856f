use clap::Parser;
use postboard::core::config::{self, CliOverrides, PostboardConfig};
use postboard::data::PostId;
use postboard::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "postboard", about = "Browse, filter and create posts from the terminal")]
struct Args {
    /// Base URL of the posts API
    #[arg(long)]
    base_url: Option<String>,

    /// Seconds to wait before the initial posts fetch
    #[arg(long)]
    load_delay: Option<u64>,

    /// Open a single post by id instead of the listing
    #[arg(long)]
    post: Option<PostId>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to postboard.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("postboard.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, falling back to defaults", e);
        PostboardConfig::default()
    });
    let cli = CliOverrides {
        base_url: args.base_url,
        load_delay_secs: args.load_delay,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Postboard starting up against {} (load delay {:?})",
        resolved.base_url,
        resolved.listing.load_delay
    );

    tui::run(resolved, args.post)
}
