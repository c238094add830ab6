//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{generate, shells};

use proj_meta_adapters::update_command;
use proj_meta_core::domain::ProjectIdentity;

use crate::cli::{Cli, CompletionsArgs, Shell};

const BIN_NAME: &str = "proj-meta";

pub fn execute(args: CompletionsArgs, identity: &ProjectIdentity) -> crate::error::CliResult<()> {
    let mut cmd = update_command(identity, Cli::command());
    let out = &mut std::io::stdout();

    match args.shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, BIN_NAME, out),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, BIN_NAME, out),
        Shell::Fish => generate(shells::Fish, &mut cmd, BIN_NAME, out),
        Shell::PowerShell => generate(shells::PowerShell, &mut cmd, BIN_NAME, out),
        Shell::Elvish => generate(shells::Elvish, &mut cmd, BIN_NAME, out),
    };

    Ok(())
}
