//! Condition-flag register.
//!
//! Four single-bit condition codes written by flag-setting arithmetic
//! instructions and read by conditional branches:
//! 1. **N** - the result is negative (bit 63 set).
//! 2. **Z** - the result is zero.
//! 3. **C** - the addition carried out of the unsigned 64-bit range.
//! 4. **V** - the addition overflowed the signed 64-bit range.
//!
//! Flags persist unchanged across non-flag-setting instructions; nothing
//! ever clears them implicitly. Each update helper is a pure function of
//! its operand values whose only side effect is writing this register.

/// The N/Z/C/V condition-flag register.
///
/// In the reference simulator this state is a process-wide singleton; here
/// it is an explicit member of [`crate::Machine`], passed by reference into
/// every simulate call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagRegister {
    n: bool,
    z: bool,
    c: bool,
    v: bool,
}

impl FlagRegister {
    /// Creates a flag register with all flags cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Negative flag.
    pub fn n(&self) -> bool {
        self.n
    }

    /// Zero flag.
    pub fn z(&self) -> bool {
        self.z
    }

    /// Carry flag.
    pub fn c(&self) -> bool {
        self.c
    }

    /// Overflow flag.
    pub fn v(&self) -> bool {
        self.v
    }

    /// Overwrites all four flags at once.
    ///
    /// Used by hosts that restore a saved machine state and by tests that
    /// pin a flag configuration before exercising conditional branches.
    pub fn write(&mut self, n: bool, z: bool, c: bool, v: bool) {
        self.n = n;
        self.z = z;
        self.c = c;
        self.v = v;
    }

    /// Derives N and Z from a result value.
    ///
    /// Every flag-setting instruction calls this with its pre-writeback
    /// result.
    pub fn update_nz(&mut self, result: u64) {
        self.n = (result as i64) < 0;
        self.z = result == 0;
    }

    /// Derives C from the two addition operands.
    ///
    /// C is set iff the exact sum of the operands' signed interpretations,
    /// computed without wraparound, falls outside the unsigned 64-bit range.
    /// Subtraction feeds this rule with the two's-complement negation of the
    /// subtrahend, so a borrow (`SUBS 0 - 1`) sets C.
    pub fn update_carry(&mut self, op1: u64, op2: u64) {
        let sum = i128::from(op1 as i64) + i128::from(op2 as i64);
        self.c = sum < 0 || sum > i128::from(u64::MAX);
    }

    /// Derives V from the two addition operands and the wrapped result.
    ///
    /// V is set iff both operands share a sign and the result's sign
    /// differs from it. Subtraction feeds this rule with its un-negated
    /// operands, mirroring the reference catalog.
    pub fn update_overflow(&mut self, op1: u64, op2: u64, result: u64) {
        let negative = |x: u64| (x as i64) < 0;
        self.v = negative(op1) == negative(op2) && negative(result) != negative(op1);
    }
}
