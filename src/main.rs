use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use vending::application::catalog::{self, CatalogEntry};
use vending::application::machine::VendingMachine;
use vending::application::roles::{Consumer, Operator};
use vending::interfaces::csv::catalog_reader::CatalogReader;
use vending::interfaces::csv::ledger_writer::LedgerWriter;
use vending::interfaces::shell::Session;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Command script to run. Reads commands from stdin when omitted.
    script: Option<PathBuf>,

    /// Catalog CSV (id,name,price,stock). Uses the built-in drinks when omitted.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Opening balance of the consumer's wallet.
    #[arg(long, default_value = "10000")]
    balance: Decimal,

    /// Currency label used when printing amounts.
    #[arg(long, default_value = "FCFA")]
    currency: String,

    /// Write the sales ledger to this CSV file when the session ends.
    #[arg(long)]
    ledger_out: Option<PathBuf>,
}

fn load_catalog(path: Option<PathBuf>) -> Result<Vec<CatalogEntry>> {
    let Some(path) = path else {
        return Ok(catalog::default_catalog());
    };
    let file = File::open(path).into_diagnostic()?;
    let mut entries = Vec::new();
    for entry in CatalogReader::new(file).entries() {
        match entry {
            Ok(entry) => entries.push(entry),
            Err(e) => warn!("Skipping catalog entry: {e}"),
        }
    }
    Ok(entries)
}

fn main() -> Result<()> {
    // RUST_LOG decides the level; warn applies only when it names none.
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut machine = VendingMachine::new();
    for id in catalog::seed(&mut machine, load_catalog(cli.catalog)?) {
        warn!(item = id, "duplicate item id in catalog, entry ignored");
    }

    let mut session = Session::new(
        machine,
        Consumer::with_balance(1, "Client", cli.balance),
        Operator::new(2, "Administrator"),
        cli.currency,
    );

    let stdout = io::stdout();
    let stderr = io::stderr();
    match cli.script {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            session
                .run(BufReader::new(file), &mut stdout.lock(), &mut stderr.lock())
                .into_diagnostic()?;
        }
        None => {
            session
                .run(io::stdin().lock(), &mut stdout.lock(), &mut stderr.lock())
                .into_diagnostic()?;
        }
    }

    if let Some(path) = cli.ledger_out {
        let file = File::create(path).into_diagnostic()?;
        let mut writer = LedgerWriter::new(file);
        writer
            .write_records(session.machine().ledger().iter())
            .into_diagnostic()?;
    }

    Ok(())
}
