//! Shell completion generation.

use std::io;

use clap::Command;
use clap_complete::{generate, Shell};
use tracing::debug;

/// Name completions are generated for.
pub const BIN_NAME: &str = "pib26";

/// Generate shell completion script.
pub fn generate_completion(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    debug!(%shell, bin = BIN_NAME, "generating completion script");
    generate(shell, cmd, BIN_NAME, out);
}
