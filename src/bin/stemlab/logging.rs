//! Log output for the command-line tool.

use std::io;
use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Environment variable holding a filter such as `stemlab=debug`.
pub const LOG_ENV: &str = "STEMLAB_LOG";

/// Installs a stderr subscriber once per process.
///
/// `STEMLAB_LOG` wins when it is set and valid. Otherwise `verbosity` picks
/// the level for the `stemlab` target: warn by default, then info, debug
/// and trace for each added `-v`.
pub fn init(verbosity: u8) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .without_time(),
            )
            .with(filter)
            .init();
    });
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "stemlab=warn",
        1 => "stemlab=info",
        2 => "stemlab=debug",
        _ => "stemlab=trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(default_directive(0), "stemlab=warn");
        assert_eq!(default_directive(1), "stemlab=info");
        assert_eq!(default_directive(2), "stemlab=debug");
        assert_eq!(default_directive(9), "stemlab=trace");
    }
}
