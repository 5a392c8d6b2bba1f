//! Common types and constants shared across the simulator core.
//!
//! This module provides fundamental building blocks used by every other
//! component. It includes:
//! 1. **Constants:** Architectural parameters of the LEGv8 teaching subset.
//! 2. **Error Handling:** The single error type surfaced by the core.

/// Architectural constants of the simulated machine.
pub mod constants;

/// Error types for catalog lookup, operand validation, and memory access.
pub mod error;

pub use constants::{INSTRUCTION_STEP, REGISTER_COUNT};
pub use error::SimulationError;
