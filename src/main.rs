//! Kiosk Presenter - binary entry point
//!
//! All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use kiosk_core::prelude::*;

/// Kiosk Presenter - welcome, videos, contact form and feedback
#[derive(Parser, Debug)]
#[command(name = "kiosk")]
#[command(about = "Touch-kiosk presentation flow", long_about = None)]
struct Args {
    /// Kiosk directory holding .kiosk/config.toml
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Run as an NDJSON host bridge (stdin commands, stdout events, no TUI)
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let kiosk_path = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if !kiosk_path.is_dir() {
        eprintln!("❌ Not a directory: {}", kiosk_path.display());
        eprintln!("   Pass the kiosk directory as an argument, e.g. kiosk /srv/kiosk");
        std::process::exit(1);
    }

    if args.headless {
        kiosk_presenter::run_headless(&kiosk_path).await
    } else {
        kiosk_presenter::run_with_kiosk(&kiosk_path).await
    }
}
