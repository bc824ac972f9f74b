//! Simulation front end.
//!
//! Provides the host facade, bytecode loading, and state snapshots.

/// Bytecode image loading.
pub mod loader;

/// Serializable state captures.
pub mod snapshot;

/// Host-facing simulator facade.
pub mod simulator;

pub use simulator::Simulator;
pub use snapshot::Snapshot;
