use clap::Parser;
use concert::{Cli, init_logging, run};
use voice::PerformanceCounter;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();
    let cli = Cli::parse();

    let summary = run(&cli, &PerformanceCounter::process(), &mut std::io::stdout())?;
    tracing::info!(sung = summary.sung, total = summary.total, "show over");
    Ok(())
}
