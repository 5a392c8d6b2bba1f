//! Decoded operand bundles.
//!
//! The external parser produces one [`OperandBundle`] per executed
//! instruction, populating only the fields relevant to that instruction's
//! format and leaving the rest at the neutral default (`None`). The
//! simulate dispatch validates presence of the fields its format requires
//! and fails fast on a missing one — a field is never silently defaulted.

/// Operands decoded from one assembly statement.
///
/// Built with the `with_*` methods, e.g. an arithmetic-format bundle:
///
/// ```
/// use legsim_core::isa::OperandBundle;
///
/// let operands = OperandBundle::new()
///     .with_rm(1)
///     .with_shamt(0)
///     .with_rn(2)
///     .with_rd(3);
/// assert_eq!(operands.rd, Some(3));
/// assert_eq!(operands.target, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperandBundle {
    /// First source register (arithmetic format).
    pub rm: Option<u8>,
    /// Second source register (arithmetic, immediate, data-transfer base).
    pub rn: Option<u8>,
    /// Destination register (arithmetic and immediate formats).
    pub rd: Option<u8>,
    /// Transfer register (data-transfer format) or the register compared by
    /// `CBNZ`.
    pub rt: Option<u8>,
    /// Shift amount (arithmetic format).
    pub shamt: Option<u32>,
    /// Signed immediate constant (immediate format).
    pub immediate: Option<i64>,
    /// Signed byte offset from the base register (data-transfer format).
    pub offset: Option<i64>,
    /// Branch target address (branch and conditional-branch formats).
    pub target: Option<u64>,
    /// Secondary opcode discriminator carried by the data-transfer parse.
    ///
    /// Part of the parser contract; no current catalog entry consumes it.
    pub opcode2: Option<String>,
}

impl OperandBundle {
    /// Creates an empty bundle with every field at the neutral default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first source register.
    pub fn with_rm(mut self, rm: u8) -> Self {
        self.rm = Some(rm);
        self
    }

    /// Sets the second source register.
    pub fn with_rn(mut self, rn: u8) -> Self {
        self.rn = Some(rn);
        self
    }

    /// Sets the destination register.
    pub fn with_rd(mut self, rd: u8) -> Self {
        self.rd = Some(rd);
        self
    }

    /// Sets the transfer register.
    pub fn with_rt(mut self, rt: u8) -> Self {
        self.rt = Some(rt);
        self
    }

    /// Sets the shift amount.
    pub fn with_shamt(mut self, shamt: u32) -> Self {
        self.shamt = Some(shamt);
        self
    }

    /// Sets the immediate constant.
    pub fn with_immediate(mut self, immediate: i64) -> Self {
        self.immediate = Some(immediate);
        self
    }

    /// Sets the data-transfer byte offset.
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the branch target address.
    pub fn with_target(mut self, target: u64) -> Self {
        self.target = Some(target);
        self
    }

    /// Sets the secondary opcode discriminator.
    pub fn with_opcode2(mut self, opcode2: impl Into<String>) -> Self {
        self.opcode2 = Some(opcode2.into());
        self
    }
}
