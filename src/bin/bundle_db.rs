//! Concatenate every scope file of one kind into the search database
//!
//! Usage:
//!   cargo run --release --bin bundle_db -- --kind house [--data data] [--output data/db]

use anyhow::Result;
use buyer_leads::bundle::{bundle_kind, BundleLimits, BundleOutput};
use buyer_leads::id::EntityKind;
use buyer_leads::store::ScopeStore;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bundle_db")]
#[command(about = "Bundle scope files into a single buyer database")]
struct Args {
    /// Data root holding {kind}/area/...
    #[arg(long, default_value = "data")]
    data: PathBuf,

    /// Property kind to bundle
    #[arg(long, value_enum)]
    kind: EntityKind,

    /// Directory for the database files
    #[arg(long, default_value = "data/db")]
    output: PathBuf,
}

fn main() -> Result<()> {
    buyer_leads::init_tracing();
    let args = Args::parse();

    println!("📦 Bundling {} buyers...\n", args.kind);
    let store = ScopeStore::new(&args.data);
    let summary = bundle_kind(&store, args.kind, &args.output, BundleLimits::default())?;

    println!("\n✅ Bundle complete");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Files read:   {:>8}", summary.files_read);
    println!("Files failed: {:>8}", summary.failures.len());
    println!("Buyers:       {:>8}", summary.records);
    println!("Size:         {:>8.2} MB", summary.bytes as f64 / 1024.0 / 1024.0);
    match &summary.output {
        BundleOutput::Single(path) => println!("Output:       {}", path.display()),
        BundleOutput::Split { index, parts } => {
            println!("Index:        {}", index.display());
            for part in parts {
                println!("   {}", part.display());
            }
        }
    }

    Ok(())
}
