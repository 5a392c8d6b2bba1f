//! LEGv8 integer register file.
//!
//! This module implements the general-purpose register file of the teaching
//! subset. It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`X0`-`X31`), 64 bits each.
//! 2. **Access:** Plain read/write by index; the reference models every
//!    register as an ordinary mutable store, with no hardwired zero register.
//! 3. **Debugging:** Provides a dump of the complete register state.

use crate::common::REGISTER_COUNT;

/// The integer register file.
///
/// Register identity is the index. Indices are validated at the instruction
/// dispatch boundary (see [`crate::isa::Instruction::simulate`]), so the
/// accessors here take pre-checked indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u64; REGISTER_COUNT],
}

impl RegisterFile {
    /// Creates a register file with every register initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; REGISTER_COUNT],
        }
    }

    /// Reads the value of register `idx`.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31), validated by the caller.
    pub fn read(&self, idx: usize) -> u64 {
        self.regs[idx]
    }

    /// Writes `val` to register `idx`.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31), validated by the caller.
    /// * `val` - The 64-bit value to store.
    pub fn write(&mut self, idx: usize, val: u64) {
        self.regs[idx] = val;
    }

    /// Dumps the contents of all registers to stdout.
    ///
    /// Displays registers in pairs with hexadecimal formatting for
    /// debugging purposes.
    pub fn dump(&self) {
        for i in (0..REGISTER_COUNT).step_by(2) {
            println!(
                "X{:<2}={:#018x} X{:<2}={:#018x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            );
        }
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
