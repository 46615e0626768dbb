use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use mimalloc::MiMalloc;

use apriori::{arff, generate_rules, mine, parse_threshold, report};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Mine frequent itemsets and association rules from a transaction file.
#[derive(Parser, Debug)]
#[command(name = "apriori", version, about)]
struct Args {
    /// Input file with transactions
    #[arg(short = 'f', value_name = "file")]
    file: PathBuf,

    /// Support threshold in [0, 1]
    #[arg(short = 's', value_name = "support", value_parser = parse_threshold)]
    support: f64,

    /// Confidence threshold in [0, 1]; when given, association rules are
    /// printed instead of frequent itemsets
    #[arg(short = 'c', value_name = "confidence", value_parser = parse_threshold)]
    confidence: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let data = arff::load_transactions(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    info!(
        "loaded {} transactions over {} items",
        data.len(),
        data.vocab().len()
    );

    let mined = mine(&data, args.support);
    info!(
        "mined {} frequent itemsets across {} levels",
        mined.table.len(),
        mined.levels.len()
    );

    // All output is buffered and written only after mining has fully
    // completed; a failed run produces no partial output.
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match args.confidence {
        Some(confidence) => {
            let rules = generate_rules(&mined, confidence);
            info!("{} rules met confidence {}", rules.len(), confidence);
            report::write_rules(&mut out, &rules, data.vocab())?;
        }
        None => report::write_itemsets(&mut out, &mined, data.vocab())?,
    }
    out.flush()?;
    Ok(())
}
