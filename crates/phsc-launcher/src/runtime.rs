use std::path::{Path, PathBuf};

/// Directory the bundled node-webkit runtime is unpacked into, relative to
/// the working directory the launcher is invoked from.
const RUNTIME_DIR: &str = "./node_modules/nodewebkit/nodewebkit";

#[cfg(windows)]
const RUNTIME_EXECUTABLE: &str = "nw.exe";
#[cfg(not(windows))]
const RUNTIME_EXECUTABLE: &str = "nw";

/// Path of the runtime executable.
///
/// Always the same relative literal; the OS resolves it against the working
/// directory at handoff time. The launcher never canonicalizes or probes it.
pub fn runtime_path() -> PathBuf {
    Path::new(RUNTIME_DIR).join(RUNTIME_EXECUTABLE)
}
