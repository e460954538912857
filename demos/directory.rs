//! Build a synthetic phone directory into a BTreeMap and a fingerprint index,
//! then time random lookups in both.
//!
//! ```text
//! cargo run --release --example directory -- --count 100000
//! RUST_LOG=debug cargo run --example directory -- --policy trust
//! ```

use std::collections::BTreeMap;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use fingerprint_index::{verify, CollisionPolicy, Config, SortedIndex, WorkloadConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    /// Compare stored keys once a fingerprint matches.
    Verify,
    /// Accept the first fingerprint match.
    Trust,
}

impl From<Policy> for CollisionPolicy {
    fn from(p: Policy) -> Self {
        match p {
            Policy::Verify => CollisionPolicy::VerifyKey,
            Policy::Trust => CollisionPolicy::TrustFingerprint,
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "BTreeMap vs sorted FNV-1a index on a synthetic directory")]
struct Args {
    /// Number of directory entries.
    #[arg(long, default_value_t = 10_000)]
    count: usize,

    /// Seed for the generated names and numbers.
    #[arg(long, default_value_t = 12_777_519)]
    seed: u64,

    /// Seed for choosing which names to look up.
    #[arg(long, default_value_t = 127)]
    probe_seed: u64,

    /// Number of lookups; defaults to --count.
    #[arg(long)]
    probes: Option<usize>,

    #[arg(long, value_enum, default_value_t = Policy::Verify)]
    policy: Policy,

    /// Reserve the whole index up front instead of growing it.
    #[arg(long)]
    preallocate: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let workload = WorkloadConfig {
        count: args.count,
        seed: args.seed,
        ..WorkloadConfig::default()
    }
    .generate()
    .context("generating directory")?;

    let config = Config {
        initial_capacity: if args.preallocate { args.count } else { 0 },
        collision_policy: args.policy.into(),
    };

    let start = Instant::now();
    let mut map: BTreeMap<String, u32> = BTreeMap::new();
    let mut index = SortedIndex::with_config(config);
    for (name, number) in workload.records() {
        map.entry(name.clone()).or_insert(*number);
        index.insert(name.as_str(), *number);
    }
    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        entries = index.len(),
        distinct = map.len(),
        collisions = index.collisions(),
        "directories built"
    );

    let probes = workload.probes(args.probe_seed, args.probes.unwrap_or(args.count));

    let start = Instant::now();
    let found = probes.iter().filter(|k| index.find(k).is_some()).count();
    info!(
        found,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "lookups in fingerprint index"
    );

    let start = Instant::now();
    let found = probes.iter().filter(|k| map.contains_key(**k)).count();
    info!(
        found,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "lookups in BTreeMap"
    );

    info!(
        index_bytes = index.memory_usage(),
        bytes_per_entry = index.memory_usage() as f64 / index.len().max(1) as f64,
        "index memory"
    );

    let checked = verify(&index, &map, workload.keys()).context("index disagrees with BTreeMap")?;
    info!(checked, "index agrees with BTreeMap");

    Ok(())
}
