//! CLI argument parsing for the forge workflow.
use crate::build_script::DEFAULT_SCRIPT_NAME;
use crate::tools::{DEFAULT_CONVERTER_URL, DEFAULT_INSTALL_DIR};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "autobsgenome",
    version,
    about = "Interactive wizard that forges BSgenome data packages",
    after_help = "Commands:\n  run                       Ask the seed questions, convert the FASTA file, and build\n  seed --answers <file>     Write the seed and build script from a JSON answers file\n  check                     Resolve faToTwoBit and the R toolchain\n\nExamples:\n  autobsgenome run\n  autobsgenome seed --answers hg38.json --workdir /data/hg38\n  autobsgenome check --yes",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Log progress of external commands (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Run(RunArgs),
    Seed(SeedArgs),
    Check(CheckArgs),
}

/// Settings for locating and installing external tools.
#[derive(Parser, Debug, Clone)]
pub struct ToolArgs {
    /// Directory receiving the seed, 2bit file, and build script
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub workdir: PathBuf,

    /// Download location of faToTwoBit
    #[arg(long, value_name = "URL", default_value = DEFAULT_CONVERTER_URL)]
    pub converter_url: String,

    /// Preferred install directory for a downloaded faToTwoBit
    #[arg(long, value_name = "DIR", default_value = DEFAULT_INSTALL_DIR)]
    pub install_dir: PathBuf,

    /// Answer yes to every install and build confirmation
    #[arg(long, short)]
    pub yes: bool,

    /// Skip the R toolchain check and the final build
    #[arg(long)]
    pub no_build: bool,
}

/// Interactive wizard with back navigation.
#[derive(Parser, Debug)]
#[command(about = "Ask the seed questions, convert the sequence file, and build the package")]
pub struct RunArgs {
    #[command(flatten)]
    pub tools: ToolArgs,
}

/// Batch rendering without prompts.
#[derive(Parser, Debug)]
#[command(about = "Write the seed file and build script from a JSON answers file")]
pub struct SeedArgs {
    /// JSON object mapping field names to answers
    #[arg(long, value_name = "FILE")]
    pub answers: PathBuf,

    /// Directory receiving the seed file and build script
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub workdir: PathBuf,

    /// Name of the generated build script
    #[arg(long, value_name = "NAME", default_value = DEFAULT_SCRIPT_NAME)]
    pub script: String,
}

/// Dependency checks only.
#[derive(Parser, Debug)]
#[command(about = "Resolve faToTwoBit and the R packages needed to build")]
pub struct CheckArgs {
    #[command(flatten)]
    pub tools: ToolArgs,
}
