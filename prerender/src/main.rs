//! # petchain-prerender
//!
//! Writes static HTML snapshots of the PetChain landing page.
//!
//! ## Usage
//!
//! ```bash
//! petchain-prerender --out-dir dist --feature-pages --emit-catalog
//! petchain-prerender --assets-dir landing/assets
//! RUST_LOG=debug petchain-prerender --variant classic
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use petchain_prerender::{BuildOptions, build_site};
use petchain_site::{Catalog, PageVariant};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "petchain-prerender")]
#[command(about = "Write static HTML snapshots of the PetChain landing page")]
#[command(version)]
struct Args {
    /// Output directory
    #[arg(long, default_value = "dist")]
    out_dir: PathBuf,

    /// Page layout: landing (click outside closes the overlay) or classic
    #[arg(long, default_value = "landing")]
    variant: PageVariant,

    /// Also write features/<slug>/index.html with each feature's overlay open
    #[arg(long)]
    feature_pages: bool,

    /// Also write catalog.json
    #[arg(long)]
    emit_catalog: bool,

    /// Copy this directory to <out-dir>/assets (the logo lives there)
    #[arg(long)]
    assets_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn run(args: Args) -> Result<()> {
    let options = BuildOptions {
        out_dir: args.out_dir,
        variant: args.variant,
        feature_pages: args.feature_pages,
        emit_catalog: args.emit_catalog,
        assets_dir: args.assets_dir,
    };
    let report = build_site(&Catalog::builtin(), &options)?;
    for path in &report.written {
        println!("{}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr; stdout lists the written files.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("petchain-prerender v{}", env!("CARGO_PKG_VERSION"));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
