#[macro_use]
mod macros;

pub mod batch;
pub mod bundle;
pub mod catalog;
pub mod generator;
pub mod id;
pub mod normalize;
pub mod pass;
pub mod record;
pub mod refine;
pub mod sampler;
pub mod stats;
pub mod store;
pub mod tables;
pub mod vocab;

/// Log to stderr at `info`, or at whatever `RUST_LOG` asks for
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
