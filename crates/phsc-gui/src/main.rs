// No console window in release builds.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use phsc_launcher::policy::SilentPolicy;

/// Argument-free entry point: everything the runtime needs is taken from the
/// process state, not the command line.
#[derive(Debug, Parser)]
#[command(author, version, about = "Starts the GUI shell from the current directory.")]
struct GuiArgs {}

fn main() {
    env_logger::init();
    let _ = GuiArgs::parse();

    let status = phsc_launcher::launch(&SilentPolicy::default());
    std::process::exit(status);
}
