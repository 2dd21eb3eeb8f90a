pub mod backup;
pub mod health;
pub mod integrity;
pub mod rowcounts;
pub mod schema;

use rowguard_core::compare::Verdict;
use rowguard_core::errors::guard_error::{EXIT_DRIFT, EXIT_OK};

/// Print the summary line, and on drift the diff followed by one line per
/// changed table; return the exit status.
pub(crate) fn report_verdict(subject: &str, verdict: &Verdict) -> i32 {
    println!("{}", verdict.summary(subject));
    match verdict {
        Verdict::Ok => EXIT_OK,
        Verdict::Drift(report) => {
            print!("{}", report.diff);
            for change in &report.changes {
                println!("{change}");
            }
            EXIT_DRIFT
        }
    }
}
