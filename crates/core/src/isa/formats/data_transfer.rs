//! Data-transfer semantics: `(Rn + offset) <-> Rt` through memory.
//!
//! The dispatch computes the effective address (wrapping signed add of the
//! base register and byte offset) before calling these functions. Loads
//! overwrite `*rt`; stores read it.
//!
//! Extension policy, reproduced from the reference catalog without
//! normalization: byte and halfword loads zero-extend, the four-byte load
//! (`LDURSW`) sign-extends, and there is intentionally no unsigned
//! four-byte counterpart. Stores truncate to the access width.

use crate::common::SimulationError;
use crate::memory::Memory;

/// `LDUR`: load a doubleword into `Rt`.
pub fn ldur(memory: &mut Memory, address: u64, rt: &mut u64) -> Result<(), SimulationError> {
    *rt = memory.load_doubleword(address)?;
    Ok(())
}

/// `LDURB`: load a byte into `Rt`, zero-extended.
pub fn ldurb(memory: &mut Memory, address: u64, rt: &mut u64) -> Result<(), SimulationError> {
    *rt = u64::from(memory.load_byte(address)?);
    Ok(())
}

/// `LDURH`: load a halfword into `Rt`, zero-extended.
pub fn ldurh(memory: &mut Memory, address: u64, rt: &mut u64) -> Result<(), SimulationError> {
    *rt = u64::from(memory.load_halfword(address)?);
    Ok(())
}

/// `LDURSW`: load a word into `Rt`, sign-extended to 64 bits.
pub fn ldursw(memory: &mut Memory, address: u64, rt: &mut u64) -> Result<(), SimulationError> {
    *rt = memory.load_word(address)? as i32 as i64 as u64;
    Ok(())
}

/// `STUR`: store the full doubleword of `Rt`.
pub fn stur(memory: &mut Memory, address: u64, rt: &mut u64) -> Result<(), SimulationError> {
    memory.store_doubleword(address, *rt)
}

/// `STURB`: store the low byte of `Rt`.
pub fn sturb(memory: &mut Memory, address: u64, rt: &mut u64) -> Result<(), SimulationError> {
    memory.store_byte(address, *rt as u8)
}

/// `STURH`: store the low halfword of `Rt`.
pub fn sturh(memory: &mut Memory, address: u64, rt: &mut u64) -> Result<(), SimulationError> {
    memory.store_halfword(address, *rt as u16)
}

/// `STURW`: store the low word of `Rt`.
pub fn sturw(memory: &mut Memory, address: u64, rt: &mut u64) -> Result<(), SimulationError> {
    memory.store_word(address, *rt as u32)
}
