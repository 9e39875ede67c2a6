pub mod builders;

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Route resolver logs into the libtest capture buffer, filtered by
/// `RUST_LOG` (default `info`). Safe to call from every test.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Position of `command` in a resolved command list.
///
/// Panics with the full list if the command is missing.
pub fn position_of(commands: &[String], command: &str) -> usize {
    commands
        .iter()
        .position(|c| c == command)
        .unwrap_or_else(|| panic!("command {command:?} missing from {commands:?}"))
}
