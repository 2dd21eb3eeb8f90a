use rowguard_core::errors::guard_error::EXIT_OK;
use rowguard_core::errors::GuardError;
use tracing::warn;

use super::{integrity, rowcounts, schema};
use crate::support::Context;

type Stage = fn(&Context) -> Result<i32, GuardError>;

/// Integrity, then schema, then row counts. The exit status is the worst
/// stage result. Strict mode stops at the first stage error; tolerant mode
/// reports it and carries on.
pub fn run(ctx: &Context) -> Result<i32, GuardError> {
    let stages: [(&str, Stage); 3] = [
        ("integrity", integrity::run as Stage),
        ("schema", schema_check as Stage),
        ("rowcounts", rowcounts::check as Stage),
    ];

    let mut worst = EXIT_OK;
    for (name, stage) in stages {
        match stage(ctx) {
            Ok(code) => worst = worst.max(code),
            Err(error) if !ctx.strict() => {
                warn!(stage = name, error = %error, "health stage failed");
                println!("{name}: ERROR ({error})");
                worst = worst.max(error.exit_code());
            }
            Err(error) => return Err(error),
        }
    }
    Ok(worst)
}

fn schema_check(ctx: &Context) -> Result<i32, GuardError> {
    schema::run(ctx, false)
}
