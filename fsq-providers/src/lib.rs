//! Node probes for fsquery
//!
//! `LocalProbe` inspects the operating system's filesystem; `MemoryProbe`
//! answers from an in-memory tree for tests and dry runs.

#[cfg(feature = "local")]
mod local;

#[cfg(feature = "memory")]
mod memory;

#[cfg(feature = "local")]
pub use local::{LocalProbe, LocalProbeConfig};

#[cfg(feature = "memory")]
pub use memory::MemoryProbe;
