//! rowguard CLI: the `rowguard` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};
use rowguard_core::errors::GuardErrorCode;
use rowguard_core::tracing::init_tracing;
use support::Context;

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let backup_keep = match cli.command {
        Commands::Backup { keep } => keep,
        _ => None,
    };

    let result = Context::load(&cli.global, backup_keep).and_then(|ctx| match cli.command {
        Commands::Rowcounts { write, refresh } => commands::rowcounts::run(&ctx, write, refresh),
        Commands::Schema { write } => commands::schema::run(&ctx, write),
        Commands::Integrity => commands::integrity::run(&ctx),
        Commands::Backup { .. } => commands::backup::create(&ctx),
        Commands::Backups => commands::backup::list(&ctx),
        Commands::Restore { file } => commands::backup::restore(&ctx, &file),
        Commands::Health => commands::health::run(&ctx),
    });

    let code = match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", error.coded_string());
            error.exit_code()
        }
    };
    std::process::exit(code);
}
