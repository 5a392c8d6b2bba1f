//! Error definitions for the simulator core.
//!
//! Every fallible operation in the core reports one of the variants below.
//! Arithmetic overflow and carry are never errors: they are condition-flag
//! outcomes, and all arithmetic wraps modulo 2^64. No error is retried
//! internally; each one propagates to the driver/UI for presentation.

use thiserror::Error;

/// Errors surfaced by catalog registration, operand validation, and the
/// memory model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// A mnemonic was requested that no catalog entry carries.
    ///
    /// Catalog lookup itself returns `Option`; drivers convert a miss into
    /// this error when reporting to the user.
    #[error("unknown instruction mnemonic `{0}`")]
    UnknownMnemonic(String),

    /// An instruction was invoked with an operand bundle that lacks a field
    /// its format requires (for example a branch with no target).
    ///
    /// Missing fields fail fast and are never silently defaulted.
    #[error("`{mnemonic}` requires operand `{field}`, which the bundle does not carry")]
    MissingOperand {
        /// Mnemonic of the instruction being simulated.
        mnemonic: &'static str,
        /// Name of the absent operand field.
        field: &'static str,
    },

    /// A register index outside the architectural register file.
    #[error("register index {index} is out of range for the 32-entry register file")]
    InvalidRegister {
        /// The offending index.
        index: u8,
    },

    /// A memory access that does not lie fully inside the modeled range.
    ///
    /// The store never grows and the address space never wraps; the access
    /// is rejected as a whole.
    #[error("{width}-byte memory access at address {address:#x} is outside the modeled range")]
    MemoryAddressing {
        /// First byte address of the rejected access.
        address: u64,
        /// Width of the access in bytes.
        width: usize,
    },

    /// An attempt to register a second instruction under an existing
    /// mnemonic. Registration rejects duplicates rather than overwriting.
    #[error("instruction mnemonic `{0}` is already registered")]
    DuplicateMnemonic(String),
}
