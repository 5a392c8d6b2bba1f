//! Semantic functions of the supported instructions, grouped by format.
//!
//! Each function implements the state transition of exactly one opcode and
//! matches the signature its format's [`crate::isa::Semantics`] variant
//! carries. The catalog (see [`crate::isa::InstructionCatalog::populate`])
//! is the authoritative table pairing these functions with mnemonics.

/// Register-register arithmetic, logic, and shifts.
pub mod arithmetic;
/// Unconditional and flag-conditioned branches.
pub mod branch;
/// Branch conditioned on a register value.
pub mod cond_branch;
/// Loads and stores.
pub mod data_transfer;
/// Register-immediate arithmetic and logic.
pub mod immediate;
