use crate::handoff::HandoffError;

/// Gate deciding what a failed handoff means for the launcher's exit.
///
/// The launch sequence itself never branches on failure handling; swapping
/// the policy at wiring time is the only way to change it.
pub trait FailurePolicy {
    fn exit_code(&self, err: &HandoffError) -> i32;
}

/// Shipped behavior: swallow the failure and report success, producing no
/// output on any stream.
pub struct SilentPolicy;

impl Default for SilentPolicy {
    fn default() -> Self {
        Self
    }
}

impl FailurePolicy for SilentPolicy {
    fn exit_code(&self, _err: &HandoffError) -> i32 {
        0
    }
}

/// Stricter deployment mode: one line on stderr and a non-zero exit.
pub struct VerbosePolicy;

impl FailurePolicy for VerbosePolicy {
    fn exit_code(&self, err: &HandoffError) -> i32 {
        eprintln!("phsc-gui: {err}");
        1
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    fn start_error() -> HandoffError {
        HandoffError::Start {
            program: "./node_modules/nodewebkit/nodewebkit/nw".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        }
    }

    #[test]
    fn silent_policy_reports_success() {
        assert_eq!(SilentPolicy.exit_code(&start_error()), 0);
    }

    #[test]
    fn verbose_policy_reports_failure() {
        assert_ne!(VerbosePolicy.exit_code(&start_error()), 0);
    }
}
