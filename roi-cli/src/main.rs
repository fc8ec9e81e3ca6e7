use chrono::Local;
use clap::Parser;

use roi_cli::{app, config::Cli, logging};

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level, cli.log_file.as_deref())?;

    let outcome = app::run(&cli, Local::now().date_naive())?;

    print!("{}", outcome.report);
    if let Some(dir) = outcome.exported {
        eprintln!("workbook written to {}", dir.display());
    }

    Ok(())
}
