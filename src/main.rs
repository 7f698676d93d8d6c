use anyhow::Result;
use buyer_leads::id::EntityKind;
use buyer_leads::stats::DistributionStats;
use buyer_leads::store::ScopeStore;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "buyer_leads")]
#[command(about = "Print attribute distributions of generated buyer files")]
struct Args {
    /// Data root holding {kind}/area/...
    #[arg(long, default_value = "data")]
    data: PathBuf,

    /// Kinds to report on
    #[arg(long, value_enum, value_delimiter = ',', default_values_t = EntityKind::ALL)]
    kinds: Vec<EntityKind>,

    /// Entries shown for fields without a natural order
    #[arg(long, default_value = "10")]
    top: usize,
}

fn main() -> Result<()> {
    buyer_leads::init_tracing();
    let args = Args::parse();
    let store = ScopeStore::new(&args.data);

    for kind in &args.kinds {
        let files = store.scope_files(*kind)?;
        let mut stats = DistributionStats::new();
        let mut skipped = 0;
        for path in &files {
            match store.read_records(path) {
                Ok(records) => stats.extend(&records),
                Err(err) => {
                    error!(path = %path.display(), "{:#}", err);
                    skipped += 1;
                }
            }
        }
        info!("{}: {} files, {} skipped", kind, files.len(), skipped);

        println!("=== {} ({} buyers) ===", kind, stats.buyers());
        if stats.buyers() > 0 {
            print!("{}", stats.report(Some(args.top)));
        }
        println!();
    }

    Ok(())
}
