//! Instruction definitions and the simulate dispatch.
//!
//! An [`Instruction`] pairs a mnemonic and description with its semantic
//! operation. The operation is a closed tagged variant over the five
//! instruction formats ([`Semantics`]), each carrying a plain function with
//! a format-specific signature. [`Instruction::simulate`] bridges the
//! decoded [`OperandBundle`] to that function: it validates the fields the
//! format requires, reads pre-mutation operand values, invokes the semantic
//! function, and writes back the destination register where the format has
//! one.

use std::fmt;

use tracing::trace;

use crate::common::{REGISTER_COUNT, SimulationError};
use crate::core::{FlagRegister, Machine, PcRegister};
use crate::isa::OperandBundle;
use crate::memory::Memory;

/// Semantic function of an arithmetic-format instruction.
///
/// Receives the flag register plus the values of `Rm`, the shift amount,
/// and `Rn`; returns the value written to `Rd`.
pub type ArithmeticFn = fn(flags: &mut FlagRegister, rm: u64, shamt: u32, rn: u64) -> u64;

/// Semantic function of an immediate-format instruction.
///
/// Receives the flag register, the signed immediate, and the value of `Rn`;
/// returns the value written to `Rd`.
pub type ImmediateFn = fn(flags: &mut FlagRegister, immediate: i64, rn: u64) -> u64;

/// Semantic function of a branch-format instruction.
///
/// Reads the flags and sets the program counter when its predicate holds;
/// performs no PC mutation otherwise (the driver supplies the default
/// advance).
pub type BranchFn = fn(flags: &FlagRegister, target: u64, pc: &mut PcRegister);

/// Semantic function of a conditional-branch-on-register instruction.
///
/// Receives the value of `Rt` and always performs exactly one PC mutation
/// itself: the jump when taken, the default advance when not.
pub type CondBranchFn = fn(rt: u64, target: u64, pc: &mut PcRegister);

/// Semantic function of a data-transfer instruction.
///
/// Receives the memory, the effective address, and the current value of
/// `Rt` behind `&mut`: loads overwrite it, stores read it.
pub type DataTransferFn = fn(memory: &mut Memory, address: u64, rt: &mut u64) -> Result<(), SimulationError>;

/// The semantic operation of an instruction, tagged by format.
#[derive(Debug, Clone, Copy)]
pub enum Semantics {
    /// Arithmetic format: `(Rm, shamt, Rn) -> Rd`.
    Arithmetic(ArithmeticFn),
    /// Immediate format: `(immediate, Rn) -> Rd`.
    Immediate(ImmediateFn),
    /// Branch format: `target -> PC` under a flag predicate.
    Branch(BranchFn),
    /// Conditional branch on a register value: `(Rt, target) -> PC`.
    CondBranchOnReg(CondBranchFn),
    /// Data-transfer format: `(Rn + offset) <-> Rt` through memory.
    DataTransfer(DataTransferFn),
}

impl Semantics {
    /// The format this operation belongs to.
    pub fn kind(&self) -> FormatKind {
        match self {
            Self::Arithmetic(_) => FormatKind::Arithmetic,
            Self::Immediate(_) => FormatKind::Immediate,
            Self::Branch(_) => FormatKind::Branch,
            Self::CondBranchOnReg(_) => FormatKind::CondBranchOnReg,
            Self::DataTransfer(_) => FormatKind::DataTransfer,
        }
    }
}

/// Fieldless mirror of [`Semantics`] for catalog listings and help
/// surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// Register-register arithmetic and shifts.
    Arithmetic,
    /// Register-immediate arithmetic.
    Immediate,
    /// Unconditional and flag-conditioned branches.
    Branch,
    /// Branch conditioned on a register value.
    CondBranchOnReg,
    /// Loads and stores.
    DataTransfer,
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Arithmetic => "Arithmetic",
            Self::Immediate => "Immediate",
            Self::Branch => "Branch",
            Self::CondBranchOnReg => "CondBranchOnReg",
            Self::DataTransfer => "DataTransfer",
        };
        f.write_str(name)
    }
}

/// One catalog entry: mnemonic, description, and semantic operation.
///
/// Immutable once constructed; created during one-time catalog population
/// and shared for the process lifetime.
#[derive(Debug, Clone, Copy)]
pub struct Instruction {
    mnemonic: &'static str,
    description: &'static str,
    semantics: Semantics,
}

impl Instruction {
    /// Creates a catalog entry.
    pub fn new(mnemonic: &'static str, description: &'static str, semantics: Semantics) -> Self {
        Self {
            mnemonic,
            description,
            semantics,
        }
    }

    /// Textual opcode name, the unique case-insensitive catalog key.
    pub fn mnemonic(&self) -> &'static str {
        self.mnemonic
    }

    /// Human-readable description for help display.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// The instruction's format.
    pub fn format(&self) -> FormatKind {
        self.semantics.kind()
    }

    /// Executes this instruction against the machine state.
    ///
    /// Reads the operand fields the instruction's format requires from
    /// `operands` (a missing field is a [`SimulationError::MissingOperand`],
    /// an out-of-range register index a
    /// [`SimulationError::InvalidRegister`]), then applies the semantic
    /// function. All register and flag inputs are read before any state is
    /// mutated.
    ///
    /// Branch-format instructions mutate the PC only when taken; `CBNZ`
    /// always performs its own single PC mutation; every other format
    /// leaves the default advance to the driver.
    pub fn simulate(
        &self,
        operands: &OperandBundle,
        machine: &mut Machine,
    ) -> Result<(), SimulationError> {
        trace!(mnemonic = self.mnemonic, "simulating instruction");
        match self.semantics {
            Semantics::Arithmetic(op) => {
                let rm = self.register(operands.rm, "Rm")?;
                let rn = self.register(operands.rn, "Rn")?;
                let rd = self.register(operands.rd, "Rd")?;
                let shamt = self.require(operands.shamt, "shamt")?;
                let result = op(
                    &mut machine.flags,
                    machine.registers.read(rm),
                    shamt,
                    machine.registers.read(rn),
                );
                machine.registers.write(rd, result);
            }
            Semantics::Immediate(op) => {
                let rn = self.register(operands.rn, "Rn")?;
                let rd = self.register(operands.rd, "Rd")?;
                let immediate = self.require(operands.immediate, "immediate")?;
                let result = op(&mut machine.flags, immediate, machine.registers.read(rn));
                machine.registers.write(rd, result);
            }
            Semantics::Branch(op) => {
                let target = self.require(operands.target, "target")?;
                op(&machine.flags, target, &mut machine.pc);
            }
            Semantics::CondBranchOnReg(op) => {
                let rt = self.register(operands.rt, "Rt")?;
                let target = self.require(operands.target, "target")?;
                op(machine.registers.read(rt), target, &mut machine.pc);
            }
            Semantics::DataTransfer(op) => {
                let rn = self.register(operands.rn, "Rn")?;
                let rt = self.register(operands.rt, "Rt")?;
                let offset = self.require(operands.offset, "offset")?;
                let address = machine.registers.read(rn).wrapping_add(offset as u64);
                let mut value = machine.registers.read(rt);
                op(&mut machine.memory, address, &mut value)?;
                machine.registers.write(rt, value);
            }
        }
        Ok(())
    }

    /// Unwraps a required operand field.
    fn require<T>(&self, field: Option<T>, name: &'static str) -> Result<T, SimulationError> {
        field.ok_or(SimulationError::MissingOperand {
            mnemonic: self.mnemonic,
            field: name,
        })
    }

    /// Unwraps a required register field and validates the index.
    fn register(&self, field: Option<u8>, name: &'static str) -> Result<usize, SimulationError> {
        let index = self.require(field, name)?;
        if usize::from(index) < REGISTER_COUNT {
            Ok(usize::from(index))
        } else {
            Err(SimulationError::InvalidRegister { index })
        }
    }
}
