use rowguard_core::canonicalize;
use rowguard_core::errors::guard_error::EXIT_OK;
use rowguard_core::errors::GuardError;

use super::report_verdict;
use crate::support::Context;

pub fn run(ctx: &Context, write: bool, refresh: bool) -> Result<i32, GuardError> {
    let manager = ctx.rowcount_manager();

    if write {
        manager.accept()?;
        println!("Wrote {}", manager.store().path().display());
        return Ok(EXIT_OK);
    }

    if refresh {
        let record = manager.refresh()?;
        print!("{}", canonicalize(&record));
        println!("staging: {}", manager.staging_path().display());
        return Ok(EXIT_OK);
    }

    check(ctx)
}

/// Default mode: print current counts, compare with the baseline.
pub fn check(ctx: &Context) -> Result<i32, GuardError> {
    let manager = ctx.rowcount_manager();
    let (current, verdict) = manager.check()?;
    print!("{}", canonicalize(&current));
    Ok(report_verdict("rowcounts", &verdict))
}
