//! Regenerate existing land buyers purpose-first
//!
//! Rewrites every file under {data}/land/area and {data}/land/station. Only
//! the old timing value survives; ids are reissued from TO-00001.
//!
//! Usage:
//!   cargo run --release --bin normalize_land -- [OPTIONS]

use anyhow::Result;
use buyer_leads::catalog::OccupationCatalog;
use buyer_leads::generator::BuyerGenerator;
use buyer_leads::normalize::normalize_land;
use buyer_leads::stats::Field;
use buyer_leads::store::ScopeStore;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "normalize_land")]
#[command(about = "Regenerate land buyer files with purpose-first attributes")]
struct Args {
    /// Data root containing land/area and land/station
    #[arg(long, default_value = "data")]
    data: PathBuf,

    /// Occupation catalog JSON
    #[arg(long, default_value = "data/occupation_list.json")]
    catalog: PathBuf,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Entries shown for occupations, reasons and NG conditions
    #[arg(long, default_value = "10")]
    stats_top: usize,
}

fn main() -> Result<()> {
    buyer_leads::init_tracing();
    let args = Args::parse();

    let catalog = OccupationCatalog::load(&args.catalog)?;
    info!("Occupation catalog loaded: {} occupations", catalog.len());

    let mut rng: StdRng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let generator = BuyerGenerator::new(&catalog);
    let store = ScopeStore::new(&args.data);
    let summary = normalize_land(&store, &generator, &mut rng)?;

    println!("{}", "=".repeat(80));
    println!("PROCESSING COMPLETE");
    println!("{}", "=".repeat(80));
    println!("Files processed: {}", summary.files_processed);
    println!("Total buyers updated: {}", summary.buyers);
    println!("Errors: {}", summary.failures.len());
    println!();

    if !summary.failures.is_empty() {
        println!("ERRORS:");
        for failure in &summary.failures {
            println!("  - {}: {}", failure.path.display(), failure.message);
        }
        println!();
    }

    println!("DISTRIBUTION STATISTICS:");
    println!();
    for field in [
        Field::Purpose,
        Field::Family,
        Field::Timing,
        Field::Method,
        Field::LandArea,
        Field::WalkingDistance,
        Field::Occupation,
        Field::Reason,
        Field::Ng,
    ] {
        println!("{}:", field.title());
        for share in summary.stats.shares(field, Some(args.stats_top)) {
            println!("  {}: {} ({:.2}%)", share.label, share.count, share.percentage);
        }
        println!();
    }

    Ok(())
}
