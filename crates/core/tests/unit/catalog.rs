//! Tests for catalog population, lookup, and enumeration.

use legsim_core::SimulationError;
use legsim_core::isa::{FormatKind, Instruction, Semantics};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::HashSet;

use crate::common::catalog;

#[test]
fn test_populate_registers_full_teaching_subset() {
    assert_eq!(catalog().len(), 38);
}

#[test]
fn test_find_is_case_insensitive_for_every_mnemonic() {
    let catalog = catalog();
    for instruction in catalog.list() {
        let mnemonic = instruction.mnemonic();
        for variant in [
            mnemonic.to_string(),
            mnemonic.to_lowercase(),
            mnemonic.to_uppercase(),
        ] {
            let found = catalog
                .find(&variant)
                .unwrap_or_else(|| panic!("`{variant}` not found"));
            assert_eq!(found.mnemonic(), mnemonic);
        }
    }
}

#[test]
fn test_find_unknown_mnemonic_returns_none() {
    assert!(catalog().find("MUL").is_none());
    assert!(catalog().find("").is_none());
}

#[test]
fn test_mnemonics_are_unique() {
    let catalog = catalog();
    let unique: HashSet<&str> = catalog.list().map(Instruction::mnemonic).collect();
    assert_eq!(unique.len(), catalog.len());
}

#[test]
fn test_list_is_lexicographically_ordered() {
    let mnemonics: Vec<&str> = catalog().list().map(Instruction::mnemonic).collect();
    let mut sorted = mnemonics.clone();
    sorted.sort_unstable();
    assert_eq!(mnemonics, sorted);
}

#[test]
fn test_register_rejects_duplicate_mnemonic() {
    let mut catalog = catalog();
    let duplicate = Instruction::new(
        "add",
        "case-insensitively collides with ADD",
        Semantics::Branch(|_, _, _| {}),
    );
    let err = catalog.register(duplicate).unwrap_err();
    assert_eq!(err, SimulationError::DuplicateMnemonic("ADD".to_string()));
    // The original entry survives.
    assert_eq!(catalog.find("ADD").unwrap().format(), FormatKind::Arithmetic);
}

#[rstest]
#[case("ADD", FormatKind::Arithmetic)]
#[case("ADDI", FormatKind::Immediate)]
#[case("B.EQ", FormatKind::Branch)]
#[case("CBNZ", FormatKind::CondBranchOnReg)]
#[case("LDURSW", FormatKind::DataTransfer)]
fn test_format_kinds(#[case] mnemonic: &str, #[case] kind: FormatKind) {
    assert_eq!(catalog().find(mnemonic).unwrap().format(), kind);
}

#[test]
fn test_display_renders_one_row_per_instruction() {
    let catalog = catalog();
    let table = catalog.to_string();
    let mut lines = table.lines();
    assert!(lines.next().unwrap().starts_with("Name"));
    assert_eq!(lines.count(), catalog.len());
    assert!(table.contains("CBNZ"));
    assert!(table.contains("CondBranchOnReg"));
}
