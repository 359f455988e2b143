//! # Resource Registry
//!
//! > **An actor-backed inventory of typed resources and the projects they work on.**
//!
//! This crate tracks a small inventory of typed resources (workers, equipment)
//! and projects, and records the allocation of resources to projects along with
//! each resource's lifecycle state (`Idle` → `InUse` → `UnderMaintenance`).
//!
//! ## 🏗️ Design Philosophy
//!
//! The registry is the only component with real invariants to enforce:
//! - A resource references at most one project at a time. The back-reference is
//!   a project *id*, never a shared pointer, so there is no ownership cycle:
//!   the registry arena is the ultimate owner of every entity.
//! - Allocation mutates resource state and project membership atomically from
//!   the caller's point of view.
//! - Maintenance is restricted to the `Equipment` subtype; for a `Worker` it is
//!   a designed no-op that reports rejection rather than failing.
//!
//! Everything else — the console menu, the append-only transaction log — is
//! peripheral plumbing kept behind narrow seams.
//!
//! ### Concurrency Model
//! All registry state lives inside a single [`RegistryActor`](registry::RegistryActor)
//! task that processes requests sequentially off an mpsc channel. One operation
//! runs to completion before the next is taken, so no locks are needed for the
//! internal maps.
//!
//! ### Type-Safe Error Handling
//! Operations return [`RegistryError`](registry::RegistryError) values
//! (`thiserror`), never panics. Lookup misses propagate untouched to the
//! console boundary, which presents them and keeps the interaction loop alive.
//!
//! ### Observability
//! Structured logging via `tracing` throughout; see [`lifecycle::tracing`] for
//! subscriber setup and `RUST_LOG` usage.
//!
//! ## 🗺️ Module Tour
//!
//! - **[`model`]**: Pure domain data — [`Resource`](model::Resource),
//!   [`Project`](model::Project) and their enums.
//! - **[`registry`]**: The core. [`Registry`](registry::Registry) holds the
//!   invariant-bearing logic; [`RegistryActor`](registry::RegistryActor) wraps
//!   it in the sequential message loop; [`registry::mock`] helps test callers
//!   without spawning the real actor.
//! - **[`clients`]**: [`RegistryClient`](clients::RegistryClient), the typed
//!   async facade that hides the message passing.
//! - **[`journal`]**: The append-only transaction log behind the
//!   [`TransactionSink`](journal::TransactionSink) trait. Best effort: a failed
//!   write never fails a business operation.
//! - **[`lifecycle`]**: [`RegistrySystem`](lifecycle::RegistrySystem) spawns the
//!   actor, wires the journal, and shuts everything down gracefully.
//! - **[`console`]**: The seven-item interactive menu that turns raw input
//!   lines into typed client calls.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the interactive console with info logs
//! RUST_LOG=info cargo run
//! ```
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod console;
pub mod journal;
pub mod lifecycle;
pub mod model;
pub mod registry;
