//! Immediate-format semantics: `(immediate, Rn) -> Rd`.
//!
//! Mirrors the arithmetic format with the second operand replaced by a
//! signed literal. Two reference asymmetries are preserved rather than
//! "completed": `ADDIS` computes overflow only (no carry check), while
//! `SUBIS` computes both via the negated-immediate carry rule; the logical
//! immediates — `ANDIS` included — set no flags.

use crate::core::FlagRegister;

/// `ADDI`: `Rd = Rn + immediate`, no flags.
pub fn addi(_flags: &mut FlagRegister, immediate: i64, rn: u64) -> u64 {
    rn.wrapping_add(immediate as u64)
}

/// `ADDIS`: `Rd = Rn + immediate`, setting N, Z, and V. Carry is not
/// checked.
pub fn addis(flags: &mut FlagRegister, immediate: i64, rn: u64) -> u64 {
    let result = rn.wrapping_add(immediate as u64);
    flags.update_nz(result);
    flags.update_overflow(rn, immediate as u64, result);
    result
}

/// `SUBI`: `Rd = Rn - immediate`, no flags.
pub fn subi(_flags: &mut FlagRegister, immediate: i64, rn: u64) -> u64 {
    rn.wrapping_sub(immediate as u64)
}

/// `SUBIS`: `Rd = Rn - immediate`, setting N, Z, C, and V.
pub fn subis(flags: &mut FlagRegister, immediate: i64, rn: u64) -> u64 {
    let result = rn.wrapping_sub(immediate as u64);
    flags.update_nz(result);
    flags.update_carry(rn, immediate.wrapping_neg() as u64);
    flags.update_overflow(rn, immediate as u64, result);
    result
}

/// `ANDI`: `Rd = Rn & immediate`, no flags.
pub fn andi(_flags: &mut FlagRegister, immediate: i64, rn: u64) -> u64 {
    rn & immediate as u64
}

/// `ANDIS`: `Rd = Rn & immediate`. Flag-neutral in the reference catalog.
pub fn andis(_flags: &mut FlagRegister, immediate: i64, rn: u64) -> u64 {
    rn & immediate as u64
}

/// `ORRI`: `Rd = Rn | immediate`, no flags.
pub fn orri(_flags: &mut FlagRegister, immediate: i64, rn: u64) -> u64 {
    rn | immediate as u64
}

/// `EORI`: `Rd = Rn ^ immediate`, no flags.
pub fn eori(_flags: &mut FlagRegister, immediate: i64, rn: u64) -> u64 {
    rn ^ immediate as u64
}
