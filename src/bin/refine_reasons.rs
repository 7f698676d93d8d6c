//! Rewrite buyer reasons as narrative sentences
//!
//! Usage:
//!   cargo run --release --bin refine_reasons -- --kind mansion [--data data] [--seed N]

use anyhow::Result;
use buyer_leads::id::EntityKind;
use buyer_leads::refine::refine_scope_files;
use buyer_leads::store::ScopeStore;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "refine_reasons")]
#[command(about = "Replace short reason tags with narrative purchase reasons")]
struct Args {
    /// Data root
    #[arg(long, default_value = "data")]
    data: PathBuf,

    /// Property kind whose files are rewritten
    #[arg(long, value_enum, default_value = "mansion")]
    kind: EntityKind,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    buyer_leads::init_tracing();
    let args = Args::parse();

    let mut rng: StdRng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let store = ScopeStore::new(&args.data);
    let summary = refine_scope_files(&store, args.kind, &mut rng)?;

    println!("\n✅ Reasons refined");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Kind:            {}", args.kind);
    println!("Files rewritten: {:>8}", summary.files_processed);
    println!("Buyers updated:  {:>8}", summary.buyers);
    println!("Files skipped:   {:>8}", summary.failures.len());
    for failure in &summary.failures {
        println!("   ✗ {}: {}", failure.path.display(), failure.message);
    }

    Ok(())
}
