use std::path::Path;

use rowguard_core::errors::guard_error::EXIT_OK;
use rowguard_core::errors::GuardError;
use rowguard_storage::{create_backup, list_backups, prune_backups, restore_backup};

use crate::support::Context;

pub fn create(ctx: &Context) -> Result<i32, GuardError> {
    let info = create_backup(&ctx.database_path(), &ctx.backup_dir(), ctx.backup_prefix())?;
    println!("Wrote {} ({} bytes)", info.path.display(), info.bytes);

    for removed in prune_backups(&ctx.backup_dir(), ctx.backup_prefix(), ctx.backup_keep())? {
        println!("Pruned {}", removed.display());
    }
    Ok(EXIT_OK)
}

pub fn list(ctx: &Context) -> Result<i32, GuardError> {
    for backup in list_backups(&ctx.backup_dir(), ctx.backup_prefix())? {
        println!("{}\t{}", backup.path.display(), backup.bytes);
    }
    Ok(EXIT_OK)
}

pub fn restore(ctx: &Context, file: &str) -> Result<i32, GuardError> {
    let database = ctx.database_path();
    restore_backup(Path::new(file), &database)?;
    println!("Restored {} from {file}", database.display());
    Ok(EXIT_OK)
}
