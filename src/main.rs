use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, info};

use dirprobe::probe::Prober;
use dirprobe::{config, logger, wordlist};

const LOG_FILE: &str = "directory_brute_forcer.log";

/// Tests directories against a base URL using a wordlist.
#[derive(Debug, Parser)]
#[command(version, about = "Directory Brute Forcer")]
struct Args {
    /// Base URL to test (e.g., http://example.com)
    #[arg(long)]
    url: String,

    /// Path to wordlist file
    #[arg(long)]
    wordlist: PathBuf,

    /// Config file path
    #[arg(long, default_value = "config.json")]
    config: PathBuf,
}

fn main() -> color_eyre::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    logger::init(Path::new(LOG_FILE))?;

    let config = config::load(&args.config);
    let words = wordlist::load(&args.wordlist);

    if words.is_empty() {
        println!("Error: Could not load wordlist");
        return Ok(());
    }

    info!("Starting directory brute force on {}", args.url);

    let prober = Prober::new(config.request_timeout()?)?;

    for word in &words {
        if prober.test_directory(&args.url, word) {
            info!("Found directory: {}/{}", args.url, word);
            println!("Found: {}/{}", args.url, word);
        } else {
            debug!("Directory not found: {}", word);
        }
    }

    Ok(())
}
