//! Branch-format semantics: `target -> PC` under a flag predicate.
//!
//! The unconditional `B` always jumps. Each conditioned variant evaluates a
//! predicate over the current flags and jumps only when it holds; when it
//! does not, the PC is left untouched and the driver supplies the default
//! advance. The flags read are whatever the most recently executed
//! flag-setting instruction wrote — nothing resets them between
//! instructions.

use crate::core::{FlagRegister, PcRegister};

/// `B`: unconditional branch.
pub fn b(_flags: &FlagRegister, target: u64, pc: &mut PcRegister) {
    pc.set(target);
}

/// `B.EQ`: branch if equal (`Z`).
pub fn beq(flags: &FlagRegister, target: u64, pc: &mut PcRegister) {
    if flags.z() {
        pc.set(target);
    }
}

/// `B.NE`: branch if not equal (`!Z`).
pub fn bne(flags: &FlagRegister, target: u64, pc: &mut PcRegister) {
    if !flags.z() {
        pc.set(target);
    }
}

/// `B.LT`: branch if signed less than (`N != V`).
pub fn blt(flags: &FlagRegister, target: u64, pc: &mut PcRegister) {
    if flags.n() != flags.v() {
        pc.set(target);
    }
}

/// `B.LE`: branch if signed less or equal (`!(!Z && N == V)`).
pub fn ble(flags: &FlagRegister, target: u64, pc: &mut PcRegister) {
    if !(!flags.z() && flags.n() == flags.v()) {
        pc.set(target);
    }
}

/// `B.GT`: branch if signed greater than (`!Z && N == V`).
pub fn bgt(flags: &FlagRegister, target: u64, pc: &mut PcRegister) {
    if !flags.z() && flags.n() == flags.v() {
        pc.set(target);
    }
}

/// `B.GE`: branch if signed greater or equal (`N == V`).
pub fn bge(flags: &FlagRegister, target: u64, pc: &mut PcRegister) {
    if flags.n() == flags.v() {
        pc.set(target);
    }
}

/// `B.MI`: branch on minus (`N`).
pub fn bmi(flags: &FlagRegister, target: u64, pc: &mut PcRegister) {
    if flags.n() {
        pc.set(target);
    }
}

/// `B.PL`: branch on plus (`!N`).
pub fn bpl(flags: &FlagRegister, target: u64, pc: &mut PcRegister) {
    if !flags.n() {
        pc.set(target);
    }
}

/// `B.VS`: branch on overflow set (`V`).
pub fn bvs(flags: &FlagRegister, target: u64, pc: &mut PcRegister) {
    if flags.v() {
        pc.set(target);
    }
}

/// `B.VC`: branch on overflow clear (`!V`).
pub fn bvc(flags: &FlagRegister, target: u64, pc: &mut PcRegister) {
    if !flags.v() {
        pc.set(target);
    }
}
