//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber.
//!
//! ## Configuration
//!
//! Output uses the compact format without module targets (`with_target(false)`); spans
//! are shown inline, so a dispatcher call reads as `login: Emit kind="LOGIN_REQUEST"`.
//! The level comes from `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: startup, shutdown and the number of events applied
//! - **Session operations**: one span per dispatcher call, one debug line per emitted event
//! - **HTTP**: one span per request; non-success statuses at `warn`
//! - **Navigation**: each guard decision at `debug`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Operations and outcomes
//! RUST_LOG=info cargo run
//!
//! # Every event the store applies, with its resulting phase
//! RUST_LOG=debug cargo run
//!
//! # Only the HTTP transport
//! RUST_LOG=shop_admin::transport=debug cargo run
//! ```
//!
//! Passwords and tokens never reach the log: the credential types redact them in their
//! `Debug` output.

/// Initializes the global subscriber. Call once, at the top of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
