//! Execution tests for the immediate format.

use legsim_core::OperandBundle;
use pretty_assertions::assert_eq;

use crate::common::{catalog, machine, run};

const I64_MAX: u64 = i64::MAX as u64;

/// `(immediate, Rn=X2) -> Rd=X3`.
fn operands(immediate: i64) -> OperandBundle {
    OperandBundle::new()
        .with_immediate(immediate)
        .with_rn(2)
        .with_rd(3)
}

#[test]
fn test_addi_simple() {
    let catalog = catalog();
    let mut machine = machine();
    machine.registers.write(2, 40);
    run(&catalog, "ADDI", &operands(2), &mut machine);
    assert_eq!(machine.registers.read(3), 42);
}

#[test]
fn test_addi_negative_immediate() {
    let catalog = catalog();
    let mut machine = machine();
    machine.registers.write(2, 40);
    run(&catalog, "ADDI", &operands(-50), &mut machine);
    assert_eq!(machine.registers.read(3), -10i64 as u64);
}

#[test]
fn test_addis_sets_overflow_but_never_carry() {
    // ADDIS performs the overflow check only; a stale carry survives.
    let catalog = catalog();
    let mut machine = machine();
    machine.flags.write(false, false, true, false);
    machine.registers.write(2, I64_MAX);
    run(&catalog, "ADDIS", &operands(1), &mut machine);
    assert!(machine.flags.v());
    assert!(machine.flags.c()); // untouched
    assert!(machine.flags.n());
}

#[test]
fn test_subi_simple() {
    let catalog = catalog();
    let mut machine = machine();
    machine.registers.write(2, 10);
    run(&catalog, "SUBI", &operands(4), &mut machine);
    assert_eq!(machine.registers.read(3), 6);
}

#[test]
fn test_subis_borrow_sets_carry() {
    let catalog = catalog();
    let mut machine = machine();
    machine.registers.write(2, 0);
    run(&catalog, "SUBIS", &operands(1), &mut machine);
    assert_eq!(machine.registers.read(3), u64::MAX);
    assert!(machine.flags.c());
    assert!(machine.flags.n());
    assert!(!machine.flags.z());
}

#[test]
fn test_subis_no_borrow_clears_carry() {
    let catalog = catalog();
    let mut machine = machine();
    machine.flags.write(false, false, true, false);
    machine.registers.write(2, 9);
    run(&catalog, "SUBIS", &operands(4), &mut machine);
    assert_eq!(machine.registers.read(3), 5);
    assert!(!machine.flags.c());
}

#[test]
fn test_andi_sign_extends_the_immediate() {
    // A negative immediate masks with all high bits set, as in the
    // reference's 64-bit promotion.
    let catalog = catalog();
    let mut machine = machine();
    machine.registers.write(2, 0xFF00);
    run(&catalog, "ANDI", &operands(-1), &mut machine);
    assert_eq!(machine.registers.read(3), 0xFF00);
}

#[test]
fn test_andis_is_flag_neutral() {
    let catalog = catalog();
    let mut machine = machine();
    machine.flags.write(false, true, false, false);
    machine.registers.write(2, 0b1100);
    run(&catalog, "ANDIS", &operands(0b1010), &mut machine);
    assert_eq!(machine.registers.read(3), 0b1000);
    assert!(machine.flags.z()); // untouched
}

#[test]
fn test_orri_and_eori() {
    let catalog = catalog();
    let mut machine = machine();
    machine.registers.write(2, 0b1100);
    run(&catalog, "ORRI", &operands(0b1010), &mut machine);
    assert_eq!(machine.registers.read(3), 0b1110);
    run(&catalog, "EORI", &operands(0b1010), &mut machine);
    assert_eq!(machine.registers.read(3), 0b0110);
}
