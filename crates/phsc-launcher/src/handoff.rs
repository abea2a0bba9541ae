use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::plan::LaunchPlan;

#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("could not start {program}: {source}", program = .program.display())]
    Start { program: PathBuf, source: io::Error },
}

/// Replace this process with the runtime described by `plan`.
///
/// Returns only when the runtime could not be started. On success the
/// launcher's code and memory are gone: the PID now runs the runtime.
#[cfg(unix)]
pub fn hand_off(plan: &LaunchPlan) -> HandoffError {
    use std::os::unix::process::CommandExt;

    let source = plan.command().exec();
    HandoffError::Start {
        program: plan.program().to_path_buf(),
        source,
    }
}

/// Emulation for targets without image replacement: run the runtime as a
/// child, forward its exit code as our own, and terminate immediately, so
/// the caller still perceives one continuous program.
#[cfg(not(unix))]
pub fn hand_off(plan: &LaunchPlan) -> HandoffError {
    let status = match plan.command().status() {
        Ok(status) => status,
        Err(source) => {
            return HandoffError::Start {
                program: plan.program().to_path_buf(),
                source,
            }
        }
    };
    std::process::exit(status.code().unwrap_or(0));
}
