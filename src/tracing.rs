//! Test-aware tracing setup.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs the global subscriber; later calls are no-ops.
///
/// Under a test harness the subscriber writes through the capture-aware
/// test writer at debug level so per-query ranking logs land in captured
/// test output. Otherwise it logs compactly to stderr at info level.
/// `RUST_LOG` overrides the default level either way.
pub fn init() {
    INIT.call_once(install);
}

fn install() {
    let under_test = std::env::var_os("NEXTEST").is_some()
        || std::env::var_os("CARGO_TARGET_TMPDIR").is_some();
    let default_level = if under_test {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let filter = EnvFilter::from_default_env().add_directive(default_level.into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .compact();

    let result = if under_test {
        builder.with_test_writer().try_init()
    } else {
        builder.with_writer(std::io::stderr).try_init()
    };
    if let Err(e) = result {
        eprintln!("failed to initialize tracing: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_a_no_op() {
        // Another subscriber may already be installed by a sibling test;
        // both calls must still return without panicking.
        init();
        init();
    }
}
