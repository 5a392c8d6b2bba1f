//! Configuration for the simulator core.
//!
//! The embedding application (editor/driver) supplies a [`Config`] when
//! constructing a [`crate::Machine`], either deserialized from its settings
//! store via serde or via `Config::default()`. Architectural parameters
//! (register count, PC step) are fixed by the ISA subset and deliberately
//! not configurable here.

use serde::Deserialize;

/// Default configuration constants.
mod defaults {
    /// Size of the modeled data memory in bytes (1 MiB).
    ///
    /// Generous for classroom programs while keeping the zero-filled store
    /// cheap to allocate per exercise.
    pub const MEMORY_SIZE: usize = 1 << 20;

    /// Initial program-counter value (instruction index of the first
    /// statement of a loaded program).
    pub const PC_START: u64 = 0;
}

/// Tunable parameters of the simulated machine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Size of the byte-addressable data memory.
    pub memory_size: usize,
    /// Program-counter value a freshly built machine starts at.
    pub pc_start: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            memory_size: defaults::MEMORY_SIZE,
            pc_start: defaults::PC_START,
        }
    }
}
