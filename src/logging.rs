// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Structured logging setup for the embedding host.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a JSON `tracing` subscriber.
///
/// `RUST_LOG` directives are honoured; this crate defaults to `debug`, everything
/// else to `info`. Calling this more than once is a no-op.
pub fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let mut filter = EnvFilter::from_default_env();
    for directive in ["locaylo_core=debug", "info"] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .try_init();
}
