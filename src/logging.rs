// SPDX-License-Identifier: MPL-2.0
//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// Without `debug` the level is pinned to `info`, ignoring `RUST_LOG`. With
/// `debug` the default is `debug` and `RUST_LOG` may override it. Calling
/// this twice keeps the first subscriber.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        init(false);
        init(true);
    }
}
