//! Execution tests for the branch formats.

use legsim_core::{OperandBundle, SimulationError};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::{catalog, machine, run};

const TARGET: u64 = 40;
const START: u64 = 7;

fn branch_operands() -> OperandBundle {
    OperandBundle::new().with_target(TARGET)
}

/// Predicate truth table over (N, Z, V). Taken sets `PC = target`; not
/// taken leaves the PC for the driver's default advance.
#[rstest]
#[case::eq_taken("B.EQ", false, true, false, true)]
#[case::eq_not_taken("B.EQ", false, false, false, false)]
#[case::ne_taken("B.NE", false, false, false, true)]
#[case::ne_not_taken("B.NE", false, true, false, false)]
#[case::lt_taken("B.LT", true, false, false, true)]
#[case::lt_not_taken("B.LT", true, false, true, false)]
#[case::le_taken_on_zero("B.LE", false, true, false, true)]
#[case::le_taken_on_less("B.LE", true, false, false, true)]
#[case::le_not_taken("B.LE", false, false, false, false)]
#[case::gt_taken("B.GT", false, false, false, true)]
#[case::gt_not_taken_on_zero("B.GT", false, true, false, false)]
#[case::ge_taken("B.GE", false, false, false, true)]
#[case::ge_not_taken("B.GE", true, false, false, false)]
#[case::mi_taken("B.MI", true, false, false, true)]
#[case::mi_not_taken("B.MI", false, false, false, false)]
#[case::pl_taken("B.PL", false, false, false, true)]
#[case::pl_not_taken("B.PL", true, false, false, false)]
#[case::vs_taken("B.VS", false, false, true, true)]
#[case::vs_not_taken("B.VS", false, false, false, false)]
#[case::vc_taken("B.VC", false, false, false, true)]
#[case::vc_not_taken("B.VC", false, false, true, false)]
fn test_conditional_branch_predicates(
    #[case] mnemonic: &str,
    #[case] n: bool,
    #[case] z: bool,
    #[case] v: bool,
    #[case] taken: bool,
) {
    let catalog = catalog();
    let mut machine = machine();
    machine.pc.set(START);
    machine.flags.write(n, z, false, v);
    run(&catalog, mnemonic, &branch_operands(), &mut machine);
    let expected = if taken { TARGET } else { START };
    assert_eq!(machine.pc.value(), expected);
}

#[test]
fn test_b_branches_unconditionally() {
    let catalog = catalog();
    let mut machine = machine();
    machine.pc.set(START);
    machine.flags.write(true, true, true, true);
    run(&catalog, "B", &branch_operands(), &mut machine);
    assert_eq!(machine.pc.value(), TARGET);
}

#[test]
fn test_lt_and_ge_are_complementary() {
    // Given N=1, V=0: B.LT taken, B.GE not taken.
    let catalog = catalog();

    let mut machine = machine();
    machine.pc.set(START);
    machine.flags.write(true, false, false, false);
    run(&catalog, "B.LT", &branch_operands(), &mut machine);
    assert_eq!(machine.pc.value(), TARGET);

    let mut machine = crate::common::machine();
    machine.pc.set(START);
    machine.flags.write(true, false, false, false);
    run(&catalog, "B.GE", &branch_operands(), &mut machine);
    assert_eq!(machine.pc.value(), START);
}

#[test]
fn test_cbnz_taken_jumps_exactly_to_target() {
    let catalog = catalog();
    let mut machine = machine();
    machine.pc.set(START);
    machine.registers.write(9, 7);
    let operands = OperandBundle::new().with_rt(9).with_target(TARGET);
    run(&catalog, "CBNZ", &operands, &mut machine);
    assert_eq!(machine.pc.value(), TARGET);
}

#[test]
fn test_cbnz_not_taken_advances_pc_itself() {
    let catalog = catalog();
    let mut machine = machine();
    machine.pc.set(START);
    machine.registers.write(9, 0);
    let operands = OperandBundle::new().with_rt(9).with_target(TARGET);
    run(&catalog, "CBNZ", &operands, &mut machine);
    assert_eq!(machine.pc.value(), START + 1);
}

#[test]
fn test_flags_persist_across_non_flag_setting_instructions() {
    // SUBS leaves Z set; AND does not disturb it; B.EQ still fires.
    let catalog = catalog();
    let mut machine = machine();
    machine.pc.set(START);
    machine.registers.write(1, 5);
    machine.registers.write(2, 5);
    let arith = OperandBundle::new()
        .with_rm(1)
        .with_shamt(0)
        .with_rn(2)
        .with_rd(3);
    run(&catalog, "SUBS", &arith, &mut machine);
    run(&catalog, "AND", &arith, &mut machine);
    run(&catalog, "B.EQ", &branch_operands(), &mut machine);
    assert_eq!(machine.pc.value(), TARGET);
}

#[test]
fn test_branch_without_target_fails_fast() {
    let catalog = catalog();
    let mut machine = machine();
    let err = catalog
        .find("B")
        .unwrap()
        .simulate(&OperandBundle::new(), &mut machine)
        .unwrap_err();
    assert_eq!(
        err,
        SimulationError::MissingOperand {
            mnemonic: "B",
            field: "target"
        }
    );
}
