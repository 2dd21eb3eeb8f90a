use rowguard_core::errors::guard_error::EXIT_OK;
use rowguard_core::errors::GuardError;
use rowguard_storage::{open_read_only, schema_checksum};

use super::report_verdict;
use crate::support::Context;

pub fn run(ctx: &Context, write: bool) -> Result<i32, GuardError> {
    let conn = open_read_only(&ctx.database_path())?;
    let checksum = schema_checksum(&conn)?;
    println!("{checksum}");

    let baseline = ctx.schema_baseline();
    if write {
        baseline.replace(&checksum)?;
        println!("Wrote {}", baseline.path().display());
        return Ok(EXIT_OK);
    }

    let verdict = baseline.check(&checksum)?;
    Ok(report_verdict("schema", &verdict))
}
