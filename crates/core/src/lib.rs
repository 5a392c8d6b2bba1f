//! LEGv8 teaching-subset instruction simulator.
//!
//! This crate implements the execution core of an educational simulator for
//! a teaching subset of the ARMv8/LEGv8 instruction set:
//! 1. **Machine State:** Register file, condition flags (N/Z/C/V), program
//!    counter, and byte-addressable memory, aggregated in [`Machine`].
//! 2. **ISA:** The instruction catalog with its five format contracts
//!    (arithmetic, immediate, branch, conditional-branch-on-register,
//!    data-transfer) and bit-exact integer semantics.
//! 3. **Configuration:** A serde-deserializable [`Config`] for the
//!    embedding application.
//!
//! Parsing assembly text into [`OperandBundle`]s, driving the fetch loop,
//! and presenting machine state are external collaborators; the core only
//! executes one decoded instruction at a time:
//!
//! ```
//! use legsim_core::{InstructionCatalog, Machine, OperandBundle};
//!
//! # fn main() -> Result<(), legsim_core::SimulationError> {
//! let catalog = InstructionCatalog::populate()?;
//! let mut machine = Machine::default();
//! machine.registers.write(1, 5);
//! machine.registers.write(2, 3);
//!
//! let add = catalog.find("add").ok_or_else(|| {
//!     legsim_core::SimulationError::UnknownMnemonic("add".into())
//! })?;
//! let operands = OperandBundle::new().with_rm(1).with_shamt(0).with_rn(2).with_rd(3);
//! add.simulate(&operands, &mut machine)?;
//! assert_eq!(machine.registers.read(3), 8);
//! # Ok(())
//! # }
//! ```

/// Common types and constants (architectural parameters, errors).
pub mod common;
/// Simulator configuration.
pub mod config;
/// Architectural machine state (registers, flags, PC, aggregate).
pub mod core;
/// Instruction set (operands, instructions, catalog, semantics).
pub mod isa;
/// Byte-addressable data memory.
pub mod memory;

/// Root configuration type; use `Config::default()` or deserialize from the
/// host's settings store.
pub use crate::config::Config;
/// The simulation error type.
pub use crate::common::SimulationError;
/// The complete mutable machine state.
pub use crate::core::Machine;
/// Instruction registry; build with `InstructionCatalog::populate()`.
pub use crate::isa::InstructionCatalog;
/// One catalog entry with its simulate dispatch.
pub use crate::isa::Instruction;
/// Decoded operands for one simulate step.
pub use crate::isa::OperandBundle;
