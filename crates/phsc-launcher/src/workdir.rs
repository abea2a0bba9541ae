use std::env;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use log::warn;

/// Query the operating system for the absolute current working directory.
pub fn capture() -> io::Result<PathBuf> {
    env::current_dir()
}

/// Capture the working directory for use as the runtime argument.
///
/// A failed query does not abort the launch: the runtime receives an empty
/// string instead of a path.
pub fn capture_or_empty() -> OsString {
    match capture() {
        Ok(path) => path.into_os_string(),
        Err(err) => {
            warn!("working directory query failed: {err}");
            OsString::new()
        }
    }
}
