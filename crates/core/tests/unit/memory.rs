//! Tests for the byte-addressable memory model.

use legsim_core::SimulationError;
use legsim_core::memory::Memory;
use pretty_assertions::assert_eq;
use rstest::rstest;

const SIZE: usize = 64;

fn memory() -> Memory {
    Memory::new(SIZE)
}

#[test]
fn test_new_memory_is_zero_filled() {
    let mem = memory();
    assert_eq!(mem.len(), SIZE);
    for addr in 0..SIZE as u64 {
        assert_eq!(mem.load_byte(addr).unwrap(), 0);
    }
}

#[test]
fn test_doubleword_roundtrip() {
    let mut mem = memory();
    mem.store_doubleword(8, 0x0123_4567_89AB_CDEF).unwrap();
    assert_eq!(mem.load_doubleword(8).unwrap(), 0x0123_4567_89AB_CDEF);
}

#[test]
fn test_word_is_little_endian() {
    let mut mem = memory();
    mem.store_word(0, 0xCAFE_BABE).unwrap();
    assert_eq!(mem.load_byte(0).unwrap(), 0xBE);
    assert_eq!(mem.load_byte(1).unwrap(), 0xBA);
    assert_eq!(mem.load_byte(2).unwrap(), 0xFE);
    assert_eq!(mem.load_byte(3).unwrap(), 0xCA);
}

#[test]
fn test_halfword_roundtrip_unaligned() {
    // No alignment requirement: a halfword may start at any byte.
    let mut mem = memory();
    mem.store_halfword(3, 0xBEEF).unwrap();
    assert_eq!(mem.load_halfword(3).unwrap(), 0xBEEF);
}

#[test]
fn test_narrow_store_preserves_neighbors() {
    let mut mem = memory();
    mem.store_doubleword(0, u64::MAX).unwrap();
    mem.store_byte(4, 0x00).unwrap();
    assert_eq!(mem.load_doubleword(0).unwrap(), 0xFFFF_FF00_FFFF_FFFF);
}

#[rstest]
#[case::byte(1)]
#[case::halfword(2)]
#[case::word(4)]
#[case::doubleword(8)]
fn test_access_past_end_is_rejected(#[case] width: usize) {
    let mut mem = memory();
    let address = SIZE as u64;
    let err = match width {
        1 => mem.store_byte(address, 0).unwrap_err(),
        2 => mem.store_halfword(address, 0).unwrap_err(),
        4 => mem.store_word(address, 0).unwrap_err(),
        _ => mem.store_doubleword(address, 0).unwrap_err(),
    };
    assert_eq!(err, SimulationError::MemoryAddressing { address, width });
}

#[test]
fn test_straddling_access_is_rejected_whole() {
    // The first bytes of the access are in range; the access still fails
    // and writes nothing.
    let mut mem = memory();
    let address = (SIZE - 4) as u64;
    let err = mem.store_doubleword(address, u64::MAX).unwrap_err();
    assert_eq!(err, SimulationError::MemoryAddressing { address, width: 8 });
    assert_eq!(mem.load_word(address).unwrap(), 0);
}

#[test]
fn test_huge_address_does_not_wrap() {
    let mem = memory();
    let err = mem.load_doubleword(u64::MAX - 3).unwrap_err();
    assert_eq!(
        err,
        SimulationError::MemoryAddressing {
            address: u64::MAX - 3,
            width: 8
        }
    );
}
