//! # Observability & Tracing
//!
//! Structured logging setup for the whole system.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown, and final entity counts
//! - **Registry Operations**: every add, lookup, allocation, and maintenance
//!   request with structured fields (`id`, `kind`, `error`)
//! - **Journal Failures**: best-effort writes that failed, at `warn` level
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show every request as it arrives at the actor
//! RUST_LOG=debug cargo run
//!
//! # Filter to the registry only
//! RUST_LOG=resource_registry::registry=debug cargo run
//! ```

/// Initializes the tracing subscriber. Call once at process start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Keep log lines short; operations carry their own fields
        .compact()
        .init();
}
