//! Architectural constants of the LEGv8 teaching subset.
//!
//! These values are fixed by the modeled instruction set, not by
//! configuration: the register count and the program-counter step are part
//! of the architecture the student programs against.

/// Number of 64-bit integer registers in the register file (`X0`-`X31`).
pub const REGISTER_COUNT: usize = 32;

/// Default program-counter advance per executed instruction.
///
/// Program addresses are instruction indices, not byte addresses: the
/// external driver fetches the next decoded instruction at `pc + 1`.
pub const INSTRUCTION_STEP: u64 = 1;
