//! Byte-addressable data memory.
//!
//! This module models the simulator's data store. It provides:
//! 1. **Typed Accessors:** Load/store at byte, halfword, word, and
//!    doubleword widths over exact-width integer types.
//! 2. **Endianness:** Little-endian composition for every width, applied
//!    consistently across all accessors.
//! 3. **Bounds Checking:** Any access not fully inside the modeled range is
//!    rejected with [`SimulationError::MemoryAddressing`]; the store never
//!    grows and the address space never wraps.
//!
//! Width extension policy (zero- vs sign-extension of loaded values) is an
//! instruction-set concern and lives in [`crate::isa::formats`], not here.

use crate::common::SimulationError;

/// The byte-addressable memory of the simulated machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    bytes: Vec<u8>,
}

impl Memory {
    /// Creates a zero-filled memory of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Size of the modeled range in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the modeled range is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Reads `W` consecutive bytes starting at `address`.
    fn load<const W: usize>(&self, address: u64) -> Result<[u8; W], SimulationError> {
        let start = self.checked_start::<W>(address)?;
        let mut buf = [0u8; W];
        buf.copy_from_slice(&self.bytes[start..start + W]);
        Ok(buf)
    }

    /// Writes `W` consecutive bytes starting at `address`.
    fn store<const W: usize>(&mut self, address: u64, data: [u8; W]) -> Result<(), SimulationError> {
        let start = self.checked_start::<W>(address)?;
        self.bytes[start..start + W].copy_from_slice(&data);
        Ok(())
    }

    /// Validates that a `W`-byte access at `address` lies fully inside the
    /// modeled range and returns the start offset.
    fn checked_start<const W: usize>(&self, address: u64) -> Result<usize, SimulationError> {
        let in_range = address
            .checked_add(W as u64)
            .is_some_and(|end| end <= self.bytes.len() as u64);
        if in_range {
            Ok(address as usize)
        } else {
            Err(SimulationError::MemoryAddressing { address, width: W })
        }
    }

    /// Loads one byte.
    pub fn load_byte(&self, address: u64) -> Result<u8, SimulationError> {
        Ok(self.load::<1>(address)?[0])
    }

    /// Loads a two-byte halfword.
    pub fn load_halfword(&self, address: u64) -> Result<u16, SimulationError> {
        Ok(u16::from_le_bytes(self.load(address)?))
    }

    /// Loads a four-byte word.
    pub fn load_word(&self, address: u64) -> Result<u32, SimulationError> {
        Ok(u32::from_le_bytes(self.load(address)?))
    }

    /// Loads an eight-byte doubleword.
    pub fn load_doubleword(&self, address: u64) -> Result<u64, SimulationError> {
        Ok(u64::from_le_bytes(self.load(address)?))
    }

    /// Stores one byte.
    pub fn store_byte(&mut self, address: u64, value: u8) -> Result<(), SimulationError> {
        self.store(address, [value])
    }

    /// Stores a two-byte halfword.
    pub fn store_halfword(&mut self, address: u64, value: u16) -> Result<(), SimulationError> {
        self.store(address, value.to_le_bytes())
    }

    /// Stores a four-byte word.
    pub fn store_word(&mut self, address: u64, value: u32) -> Result<(), SimulationError> {
        self.store(address, value.to_le_bytes())
    }

    /// Stores an eight-byte doubleword.
    pub fn store_doubleword(&mut self, address: u64, value: u64) -> Result<(), SimulationError> {
        self.store(address, value.to_le_bytes())
    }
}
