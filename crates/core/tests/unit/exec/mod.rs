//! Execution tests, one module per instruction format.

/// Branch formats, including `CBNZ`.
pub mod branch;
/// Immediate-format instructions.
pub mod immediate;
