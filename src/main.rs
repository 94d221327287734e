use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod build_script;
mod cli;
mod derive;
mod escape;
mod metadata;
mod schema;
mod seed;
mod templates;
#[cfg(test)]
mod test_support;
mod tools;
mod wizard;
mod workflow;

use cli::{Command, RootArgs, ToolArgs};
use wizard::TerminalPrompter;
use workflow::{ConversionStatus, ForgeConfig};

fn main() -> Result<()> {
    let args = RootArgs::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Run(run) => cmd_run(&run.tools),
        Command::Seed(seed) => {
            let answers = seed
                .answers
                .canonicalize()
                .with_context(|| format!("resolve answers file {}", seed.answers.display()))?;
            let workdir = enter_workdir(&seed.workdir)?;
            workflow::run_seed(&answers, &workdir, &seed.script).map(|_| ())
        }
        Command::Check(check) => {
            let config = forge_config(&check.tools)?;
            let mut prompter = TerminalPrompter::new(check.tools.yes);
            workflow::run_check(&config, &mut prompter)
        }
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve the working directory and make it the process directory, so the
/// wizard's directory listing and defaults describe the same place.
fn enter_workdir(workdir: &Path) -> Result<PathBuf> {
    let resolved = workdir
        .canonicalize()
        .with_context(|| format!("resolve workdir {}", workdir.display()))?;
    std::env::set_current_dir(&resolved)
        .with_context(|| format!("enter workdir {}", resolved.display()))?;
    Ok(resolved)
}

fn forge_config(tools: &ToolArgs) -> Result<ForgeConfig> {
    let workdir = enter_workdir(&tools.workdir)?;
    let mut config = ForgeConfig::new(workdir);
    config.converter.url = tools.converter_url.clone();
    config.converter.install_dir = tools.install_dir.clone();
    config.skip_build = tools.no_build;
    Ok(config)
}

fn cmd_run(tools: &ToolArgs) -> Result<()> {
    let config = forge_config(tools)?;
    let mut prompter = TerminalPrompter::new(tools.yes);
    let report = workflow::run_forge(&config, &mut prompter)?;
    tracing::info!(
        seed = %report.seed.display(),
        script = %report.script.display(),
        "forge run finished"
    );
    if let ConversionStatus::Failed(detail) = &report.conversion {
        eprintln!("warning: 2bit conversion failed: {detail}");
    }
    if report.build_succeeded == Some(false) {
        eprintln!("warning: build script reported a failure");
    }
    Ok(())
}
