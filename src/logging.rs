//! Diagnostic tracing for debugging the hook.
//!
//! Claude Code shows a hook's stderr to the model and the user, so the
//! default filter is `off`. Set `RUST_LOG` to opt in:
//!
//! ```bash
//! RUST_LOG=bonzai_burn_hook=debug bonzai-burn-hook hook < stop.json
//! ```

use std::io::IsTerminal;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber. Output: stderr, compact format.
///
/// Stdout carries the hook's JSON, so nothing is ever logged there.
pub(crate) fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    let ansi = std::io::stderr().is_terminal();

    // try_init: a second call (e.g. from a test harness) must not panic.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .compact(),
        )
        .try_init();
}
