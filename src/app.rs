use crate::args::Args;
use crate::config::Config;
use crate::presentation;
use anyhow::{Context, Result};
use kvscan_engine::report;

/// Scan, report and write. Per-file failures are printed and skipped; any
/// other failure aborts before the report is written.
pub fn run(args: Args) -> Result<()> {
    let quiet = args.behavior.quiet;
    let config = Config::try_from(args)?;

    let result = kvscan_engine::run(&config).with_context(|| {
        format!("failed to scan {}", config.walk.root.display())
    })?;
    presentation::print_file_errors(&result);

    let path = report::write_report(&result, &config).context("failed to write report")?;
    if !quiet {
        presentation::print_completion(&path, &result);
    }
    Ok(())
}

/// Install the `log` backend. `RUST_LOG` applies unless `verbose` is set.
pub fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}
