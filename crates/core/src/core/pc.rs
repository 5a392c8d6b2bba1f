//! Program counter.
//!
//! A single 64-bit address register holding the instruction index of the
//! next statement to fetch. Exactly one actor mutates it per executed
//! instruction: the instruction's branch logic when a branch is taken, the
//! driver's default advance otherwise — except `CBNZ`, which performs its
//! own advance in the not-taken case.

use crate::common::INSTRUCTION_STEP;

/// The program-counter register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PcRegister {
    value: u64,
}

impl PcRegister {
    /// Creates a program counter starting at `start`.
    pub fn new(start: u64) -> Self {
        Self { value: start }
    }

    /// Current program-counter value.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Jumps to `target`. Used by taken branches.
    pub fn set(&mut self, target: u64) {
        self.value = target;
    }

    /// Advances by the default step of one instruction unit.
    pub fn advance(&mut self) {
        self.value = self.value.wrapping_add(INSTRUCTION_STEP);
    }
}
