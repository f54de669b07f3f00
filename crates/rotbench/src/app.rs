//! Application entry point and dispatch.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::debug;

use rotbench_cli::output::format_report_json;
use rotbench_cli::presenter::CLIResultPresenter;
use rotbench_cli::prompt::Prompter;
use rotbench_orchestration::driver::run_benchmark;
use rotbench_orchestration::interfaces::NullPresenter;

use crate::config::AppConfig;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        rotbench_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    debug!(version = %full_version(), "starting");

    // JSON mode keeps stdout for the report alone
    let stdin = io::stdin().lock();
    if config.json {
        run_json(config, Prompter::new(stdin, io::stderr()))
    } else {
        run_text(config, Prompter::new(stdin, io::stdout()))
    }
}

fn run_text<R: BufRead, W: Write>(config: &AppConfig, mut prompter: Prompter<R, W>) -> Result<()> {
    let options = config.benchmark_options(&mut prompter)?;
    let presenter = CLIResultPresenter::new(options.preview_len);
    let report = run_benchmark(&options, &presenter)?;
    debug!(speedup = ?report.speedup.ratio(), "benchmark complete");

    if !config.no_wait {
        prompter.wait_for_key("Press Enter to finish...")?;
    }
    Ok(())
}

fn run_json<R: BufRead, W: Write>(config: &AppConfig, mut prompter: Prompter<R, W>) -> Result<()> {
    let options = config.benchmark_options(&mut prompter)?;
    let report = run_benchmark(&options, &NullPresenter)?;
    println!("{}", format_report_json(&report)?);
    Ok(())
}
