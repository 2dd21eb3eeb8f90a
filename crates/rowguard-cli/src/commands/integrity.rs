use rowguard_core::errors::guard_error::{EXIT_DRIFT, EXIT_OK};
use rowguard_core::errors::GuardError;
use rowguard_storage::{integrity_check, open_read_only};

use crate::support::Context;

pub fn run(ctx: &Context) -> Result<i32, GuardError> {
    let conn = open_read_only(&ctx.database_path())?;
    let report = integrity_check(&conn)?;
    if report.is_ok() {
        println!("integrity: OK");
        return Ok(EXIT_OK);
    }
    println!("integrity: FAILED");
    for message in &report.messages {
        println!("  {message}");
    }
    Ok(EXIT_DRIFT)
}
