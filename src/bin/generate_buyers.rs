//! Synthetic buyer generator for the area pages
//!
//! Writes one JSON file per town and property kind, sized by how busy the
//! town is.
//!
//! Usage:
//!   cargo run --release --bin generate_buyers -- [OPTIONS]
//!
//! Options:
//!   --taxonomy <PATH>        Prefecture → city → town listing (default: data/area_town_data.json)
//!   --catalog <PATH>         Occupation catalog (default: data/occupation_list.json)
//!   --output <DIR>           Data root to write into (default: data)
//!   --kinds <KINDS>          Comma-separated kinds (default: house,land)
//!   --land-strategy <NAME>   family-first or purpose-first (default: family-first)
//!   --seed <N>               Random seed for reproducibility (optional)

use anyhow::Result;
use buyer_leads::batch::{run_area_batch, AreaTaxonomy};
use buyer_leads::catalog::OccupationCatalog;
use buyer_leads::generator::BuyerGenerator;
use buyer_leads::id::EntityKind;
use buyer_leads::store::ScopeStore;
use buyer_leads::tables::Strategy;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "generate_buyers")]
#[command(about = "Generate synthetic buyer files for every town")]
struct Args {
    /// Area taxonomy JSON (prefecture → city → towns)
    #[arg(long, default_value = "data/area_town_data.json")]
    taxonomy: PathBuf,

    /// Occupation catalog JSON
    #[arg(long, default_value = "data/occupation_list.json")]
    catalog: PathBuf,

    /// Data root; files land in {output}/{kind}/area/...
    #[arg(long, default_value = "data")]
    output: PathBuf,

    /// Property kinds to generate
    #[arg(long, value_enum, value_delimiter = ',', default_values_t = [EntityKind::House, EntityKind::Land])]
    kinds: Vec<EntityKind>,

    /// Attribute ordering for land buyers
    #[arg(long, value_enum, default_value = "family-first")]
    land_strategy: Strategy,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    buyer_leads::init_tracing();
    let args = Args::parse();

    println!("🏠 Buyer Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Taxonomy:       {}", args.taxonomy.display());
    println!("Catalog:        {}", args.catalog.display());
    println!("Output:         {}", args.output.display());
    println!(
        "Kinds:          {}",
        args.kinds.iter().map(|k| k.to_string()).collect::<Vec<_>>().join(", ")
    );
    println!("Land strategy:  {:?}", args.land_strategy);
    if let Some(seed) = args.seed {
        println!("Random seed:    {}", seed);
    }
    println!();

    // Both inputs are required before anything is written
    let catalog = OccupationCatalog::load(&args.catalog)?;
    info!("Occupation catalog loaded: {} occupations", catalog.len());
    let taxonomy = AreaTaxonomy::load(&args.taxonomy)?;
    info!("Area taxonomy loaded: {} towns", taxonomy.town_count());

    let mut rng: StdRng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let generator = BuyerGenerator::new(&catalog);
    let store = ScopeStore::new(&args.output);

    println!("🏭 Generating buyers...");
    let summary = run_area_batch(&taxonomy, &generator, &args.kinds, args.land_strategy, &store, &mut rng)?;

    println!("\n✅ Generation complete!");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Scope files:    {:>8}", summary.scopes_written);
    for kind in &args.kinds {
        println!("{:<15} {:>8}", format!("{}:", kind), summary.total(*kind));
    }

    Ok(())
}
