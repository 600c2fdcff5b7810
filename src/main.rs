use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use homeledger::{report, Config, SqliteStorage, Store};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if let Some(arg) = args.get(1) {
        match arg.as_str() {
            "--version" | "-V" | "version" => {
                println!("homeledger {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            _ => {
                println!("Usage: homeledger");
                println!();
                println!("Prints the dashboard summary for the local ledger.");
                println!("  {}  data directory", homeledger::config::DATA_DIR_ENV);
                println!("  {}      log filter (default homeledger=info)", homeledger::config::LOG_ENV);
                return Ok(());
            }
        }
    }

    let config = Config::from_env()?;
    setup_logging(&config);

    let db_path = config.database_path();
    let storage = SqliteStorage::open(&db_path)
        .with_context(|| format!("Failed to open database: {}", db_path.display()))?;
    let store = Store::load(storage).context("Failed to load ledger")?;

    let load_report = store.load_report();
    if !load_report.repairs.is_empty() {
        eprintln!(
            "Warning: {} inconsistent record(s) were repaired while loading",
            load_report.repairs.len()
        );
    }

    print!("{}", report::summary(&store.snapshot())?);
    Ok(())
}

fn setup_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
