//! Arithmetic-format semantics: `(Rm, shamt, Rn) -> Rd`.
//!
//! All arithmetic wraps modulo 2^64. The `S`-suffixed add/subtract variants
//! write the condition flags from their pre-writeback operand values; the
//! logical operations set no flags at all — including `ANDS`, which the
//! reference catalog leaves flag-neutral despite its suffix. That deviation
//! is reproduced here deliberately to match observable reference output.
//!
//! Shifts use `Rn` and the shift amount; the hardware masks the amount to
//! the register width, which `wrapping_shl`/`wrapping_shr` model exactly.

use crate::core::FlagRegister;

/// `ADD`: `Rd = Rm + Rn`, no flags.
pub fn add(_flags: &mut FlagRegister, rm: u64, _shamt: u32, rn: u64) -> u64 {
    rm.wrapping_add(rn)
}

/// `ADDS`: `Rd = Rm + Rn`, setting N, Z, C, and V.
pub fn adds(flags: &mut FlagRegister, rm: u64, _shamt: u32, rn: u64) -> u64 {
    let result = rm.wrapping_add(rn);
    flags.update_nz(result);
    flags.update_carry(rm, rn);
    flags.update_overflow(rm, rn, result);
    result
}

/// `SUB`: `Rd = Rn - Rm`, no flags.
pub fn sub(_flags: &mut FlagRegister, rm: u64, _shamt: u32, rn: u64) -> u64 {
    rn.wrapping_sub(rm)
}

/// `SUBS`: `Rd = Rn - Rm`, setting N, Z, C, and V.
///
/// The borrow is modeled by feeding the carry rule the two's-complement
/// negation of `Rm`; the overflow rule sees the un-negated operands.
pub fn subs(flags: &mut FlagRegister, rm: u64, _shamt: u32, rn: u64) -> u64 {
    let result = rn.wrapping_sub(rm);
    flags.update_nz(result);
    flags.update_carry(rn, rm.wrapping_neg());
    flags.update_overflow(rn, rm, result);
    result
}

/// `AND`: `Rd = Rm & Rn`, no flags.
pub fn and(_flags: &mut FlagRegister, rm: u64, _shamt: u32, rn: u64) -> u64 {
    rm & rn
}

/// `ANDS`: `Rd = Rm & Rn`. Flag-neutral in the reference catalog.
pub fn ands(_flags: &mut FlagRegister, rm: u64, _shamt: u32, rn: u64) -> u64 {
    rm & rn
}

/// `ORR`: `Rd = Rm | Rn`, no flags.
pub fn orr(_flags: &mut FlagRegister, rm: u64, _shamt: u32, rn: u64) -> u64 {
    rm | rn
}

/// `EOR`: `Rd = Rm ^ Rn`, no flags.
pub fn eor(_flags: &mut FlagRegister, rm: u64, _shamt: u32, rn: u64) -> u64 {
    rm ^ rn
}

/// `LSL`: `Rd = Rn << shamt`.
pub fn lsl(_flags: &mut FlagRegister, _rm: u64, shamt: u32, rn: u64) -> u64 {
    rn.wrapping_shl(shamt)
}

/// `LSR`: `Rd = Rn >> shamt`, zero-filling from the left.
pub fn lsr(_flags: &mut FlagRegister, _rm: u64, shamt: u32, rn: u64) -> u64 {
    rn.wrapping_shr(shamt)
}
