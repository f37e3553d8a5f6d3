//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::{debug, info};

use algolab_cli::output::write_report;
use algolab_cli::ui::print_success;

use crate::config::{AppConfig, Demo};
use crate::demos::Session;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        algolab_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let mut session = Session::new(config, full_version());
    for demo in config.demo.expand() {
        debug!(?demo, "running demo");
        match demo {
            Demo::Fib => session.fibonacci()?,
            Demo::Sort => session.sort()?,
            Demo::Arrays => session.arrays()?,
            Demo::Search => session.search(),
            Demo::Recursion => session.recursion()?,
            Demo::Matrix => session.matrix()?,
            Demo::List => session.list(),
            Demo::All => {}
        }
    }
    if config.demo == Demo::All {
        session.summary();
    }

    if let Some(path) = &config.output {
        write_report(path, session.report())
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        info!(path = %path.display(), "report written");
        if !config.quiet {
            print_success(&format!("report written to {}", path.display()));
        }
    }
    Ok(())
}
