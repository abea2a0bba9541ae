//! Native wrapper that hands the process over to the bundled GUI runtime.
//!
//! The whole job is three steps: capture the working directory, point at the
//! node-webkit executable unpacked under `./node_modules`, and replace this
//! process image with it, passing the directory as the runtime's only
//! argument. What a failed handoff means is decided by a [`FailurePolicy`].

pub mod handoff;
pub mod plan;
pub mod policy;
pub mod runtime;
pub mod workdir;

use log::debug;

use crate::plan::LaunchPlan;
use crate::policy::FailurePolicy;

/// Run the launch sequence.
///
/// Returns an exit code only when the handoff did not happen; after a
/// successful handoff this process is the runtime and nothing here resumes.
pub fn launch(policy: &impl FailurePolicy) -> i32 {
    let plan = LaunchPlan::discover();
    debug!(
        "handing off to {} with workdir {:?}",
        plan.program().display(),
        plan.workdir()
    );
    let err = handoff::hand_off(&plan);
    policy.exit_code(&err)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::policy::SilentPolicy;

    #[test]
    fn silent_launch_without_a_runtime_exits_zero() {
        // No runtime is unpacked beneath the test working directory, so the
        // handoff fails and the legacy contract applies.
        assert_eq!(launch(&SilentPolicy), 0);
    }
}
