//! Conditional-branch-on-register semantics.
//!
//! Unlike the flag-conditioned branch family, `CBNZ` never defers the
//! not-taken case to the driver: it performs exactly one PC mutation itself
//! on every execution, either the jump or the default advance.

use crate::core::PcRegister;

/// `CBNZ`: branch to `target` if `Rt != 0`, otherwise advance the PC by the
/// default step.
pub fn cbnz(rt: u64, target: u64, pc: &mut PcRegister) {
    if rt != 0 {
        pc.set(target);
    } else {
        pc.advance();
    }
}
