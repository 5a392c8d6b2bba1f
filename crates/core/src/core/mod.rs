//! Architectural machine state.
//!
//! This module aggregates the mutable state an executing instruction
//! operates on:
//! 1. **Registers:** The 32-entry integer register file.
//! 2. **Flags:** The N/Z/C/V condition-flag register.
//! 3. **Program Counter:** The next-instruction address.
//! 4. **Memory:** The byte-addressable data store.
//!
//! Execution is single-threaded and synchronous: one instruction's simulate
//! step fully settles all four components before the next fetch. The core
//! defines no internal locking; a multi-threaded host must serialize access
//! externally.

use crate::config::Config;
use crate::memory::Memory;

/// Condition-flag register (N, Z, C, V).
pub mod flags;
/// Program-counter register.
pub mod pc;
/// Integer register file.
pub mod registers;

pub use flags::FlagRegister;
pub use pc::PcRegister;
pub use registers::RegisterFile;

/// The complete mutable machine state, passed `&mut` into every simulate
/// call.
///
/// The reference simulator keeps these as process-wide singletons; modeling
/// them as one explicit aggregate removes the hidden global state while
/// preserving the synchronous update contract.
#[derive(Debug)]
pub struct Machine {
    /// Integer register file.
    pub registers: RegisterFile,
    /// Condition flags, written by flag-setting arithmetic instructions.
    pub flags: FlagRegister,
    /// Program counter.
    pub pc: PcRegister,
    /// Byte-addressable data memory.
    pub memory: Memory,
}

impl Machine {
    /// Builds a zeroed machine from the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            registers: RegisterFile::new(),
            flags: FlagRegister::new(),
            pc: PcRegister::new(config.pc_start),
            memory: Memory::new(config.memory_size),
        }
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
