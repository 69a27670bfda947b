use std::process::ExitCode;

use clap::Parser;
use jobscout::commands::{Cli, CommandError, JobScout};
use jobscout::config::Config;
use tracing::debug;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("jobscout=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => return Ok(report(e.into())),
    };

    let app = JobScout::new(config);
    let mut stdout = std::io::stdout().lock();
    match app.run(cli.command, &mut stdout) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => Ok(report(e)),
    }
}

fn report(e: CommandError) -> ExitCode {
    debug!(error = ?e, "command failed");
    eprintln!("error: {}", e.user_message());
    e.exit_code()
}
