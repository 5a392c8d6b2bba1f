//! The supported instruction set.
//!
//! This module defines everything the execution driver needs to run decoded
//! programs:
//! 1. **Operands:** The [`OperandBundle`] contract with the external parser.
//! 2. **Instructions:** [`Instruction`] definitions and the per-format
//!    simulate dispatch.
//! 3. **Catalog:** The [`InstructionCatalog`] registry with population,
//!    case-insensitive lookup, and ordered enumeration.
//! 4. **Semantics:** The per-opcode state-transition functions, grouped by
//!    format under [`formats`].

/// The instruction registry.
pub mod catalog;
/// Per-opcode semantic functions, grouped by format.
pub mod formats;
/// Instruction definitions and simulate dispatch.
pub mod instruction;
/// Decoded operand bundles.
pub mod operands;

pub use catalog::InstructionCatalog;
pub use instruction::{FormatKind, Instruction, Semantics};
pub use operands::OperandBundle;
