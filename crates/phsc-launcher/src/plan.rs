use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::{runtime, workdir};

/// Everything the handoff needs: the runtime program and its one argument.
#[derive(Debug, Clone)]
pub struct LaunchPlan {
    program: PathBuf,
    workdir: OsString,
}

impl LaunchPlan {
    /// Assemble the plan from the current process state.
    pub fn discover() -> Self {
        Self {
            program: runtime::runtime_path(),
            workdir: workdir::capture_or_empty(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn workdir(&self) -> &OsStr {
        &self.workdir
    }

    /// The command handed to the OS: argv is exactly `[program, workdir]`,
    /// environment and standard streams inherited untouched.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(&self.workdir);
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discover_pairs_runtime_path_with_workdir() {
        let plan = LaunchPlan::discover();
        assert_eq!(plan.program(), runtime::runtime_path());
        assert_eq!(
            plan.workdir(),
            std::env::current_dir().expect("working directory").as_os_str()
        );
    }

    #[test]
    fn command_carries_exactly_one_argument() {
        let plan = LaunchPlan::discover();
        let cmd = plan.command();
        assert_eq!(cmd.get_program(), plan.program().as_os_str());
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, vec![plan.workdir()]);
    }

    #[test]
    fn command_leaves_the_environment_alone() {
        let plan = LaunchPlan::discover();
        assert_eq!(plan.command().get_envs().count(), 0);
    }
}
