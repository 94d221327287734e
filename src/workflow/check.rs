//! `autobsgenome check`: resolve external tools without forging anything.
use super::ForgeConfig;
use crate::tools::{ensure_converter, ensure_toolchain};
use crate::wizard::Prompter;
use anyhow::Result;

pub fn run_check(config: &ForgeConfig, prompter: &mut dyn Prompter) -> Result<()> {
    let converter = ensure_converter(&config.converter, prompter)?;
    prompter.notice(&format!("converter: {}", converter.display()));
    if !config.skip_build {
        let rscript = ensure_toolchain(prompter, &config.workdir)?;
        prompter.notice(&format!("Rscript: {}", rscript.display()));
    }
    Ok(())
}
