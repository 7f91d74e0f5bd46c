//! Static build binary - renders one page per locale into the output directory
//!
//! Usage:
//!   cargo run --bin build-site                     # Build into SITE_OUT_DIR (defaults to dist)
//!   cargo run --bin build-site -- --out public     # Build into ./public
//!   cargo run --bin build-site -- --strict         # Fail on missing catalog keys
//!
//! Optional environment variables:
//! - SITE_OUT_DIR, SITE_LOCALES_DIR
//! - SITE_PHONE, SITE_EMAIL, SITE_HERO_IMAGE, SITE_COPYRIGHT_YEAR

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use tanzo_site::bundle::{self, BuildPlan};
use tanzo_site::config::Config;
use tracing::info;

struct Args {
    out_dir: Option<PathBuf>,
    strict: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        out_dir: None,
        strict: false,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--out" => {
                let dir = iter.next().context("--out requires a directory")?;
                args.out_dir = Some(PathBuf::from(dir));
            }
            "--strict" => args.strict = true,
            other => bail!("Unknown argument: {}", other),
        }
    }

    Ok(args)
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tanzo_site=info".parse()?),
        )
        .init();

    let args = parse_args()?;
    let config = Config::from_env()?;
    let catalog = config.load_catalog()?;

    let out_dir = args.out_dir.unwrap_or_else(|| config.out_dir.clone());
    let plan = BuildPlan::from_registry(out_dir).strict(args.strict);
    info!("Building {} locale entries", plan.entries.len());

    let output = bundle::build_site(&plan, &catalog, &config.site)?;

    for entry in &output.entries {
        println!("{}", plan.out_dir.join(entry).display());
    }
    for asset in &output.assets {
        println!("{}", plan.out_dir.join(asset).display());
    }
    println!("{}", plan.out_dir.join(&output.manifest).display());

    Ok(())
}
