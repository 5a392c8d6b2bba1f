//! The instruction catalog.
//!
//! A deduplicated, mnemonic-ordered registry of every supported
//! instruction. It provides:
//! 1. **Population:** A one-time enumeration of the teaching subset; the
//!    authoritative reference table pairing mnemonics with semantics.
//! 2. **Lookup:** Case-insensitive `find` by mnemonic.
//! 3. **Enumeration:** Lazy, lexicographically ordered `list` for help and
//!    diagnostic display, plus a formatted `Display` table.
//!
//! After population the catalog is read-only and may be shared freely
//! across concurrent readers.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

use tracing::debug;

use crate::common::SimulationError;
use crate::isa::formats::{arithmetic, branch, cond_branch, data_transfer, immediate};
use crate::isa::instruction::{Instruction, Semantics};

/// The registry of supported instructions, keyed by upper-cased mnemonic.
#[derive(Debug, Clone, Default)]
pub struct InstructionCatalog {
    entries: BTreeMap<String, Instruction>,
}

impl InstructionCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an instruction, rejecting duplicate mnemonics.
    ///
    /// Rejection (rather than overwrite) keeps population mistakes loud:
    /// a second registration under an existing mnemonic returns
    /// [`SimulationError::DuplicateMnemonic`] and leaves the first entry in
    /// place.
    pub fn register(&mut self, instruction: Instruction) -> Result<(), SimulationError> {
        let key = instruction.mnemonic().to_ascii_uppercase();
        match self.entries.entry(key) {
            Entry::Occupied(occupied) => {
                Err(SimulationError::DuplicateMnemonic(occupied.key().clone()))
            }
            Entry::Vacant(vacant) => {
                let _ = vacant.insert(instruction);
                Ok(())
            }
        }
    }

    /// Looks up an instruction by mnemonic, case-insensitively.
    pub fn find(&self, mnemonic: &str) -> Option<&Instruction> {
        self.entries.get(&mnemonic.to_ascii_uppercase())
    }

    /// Iterates all instructions in lexicographic mnemonic order.
    pub fn list(&self) -> impl Iterator<Item = &Instruction> {
        self.entries.values()
    }

    /// Number of registered instructions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds the catalog of the complete teaching subset.
    ///
    /// This table is the authoritative pairing of mnemonics with semantic
    /// functions; the per-format modules under [`crate::isa::formats`] hold
    /// the state-transition code it references.
    pub fn populate() -> Result<Self, SimulationError> {
        use Semantics::{Arithmetic, Branch, CondBranchOnReg, DataTransfer, Immediate};

        let table = [
            //// Arithmetic format ////
            Instruction::new(
                "ADD",
                "Adds the values of registers Rm and Rn into Rd without setting flags",
                Arithmetic(arithmetic::add),
            ),
            Instruction::new(
                "ADDS",
                "Adds the values of registers Rm and Rn into Rd and sets the flags",
                Arithmetic(arithmetic::adds),
            ),
            Instruction::new(
                "SUB",
                "Subtracts the value of register Rm from Rn into Rd without setting flags",
                Arithmetic(arithmetic::sub),
            ),
            Instruction::new(
                "SUBS",
                "Subtracts the value of register Rm from Rn into Rd and sets the flags",
                Arithmetic(arithmetic::subs),
            ),
            Instruction::new(
                "AND",
                "Bitwise AND of registers Rm and Rn into Rd",
                Arithmetic(arithmetic::and),
            ),
            Instruction::new(
                "ANDS",
                "Bitwise AND of registers Rm and Rn into Rd (flag-neutral in this subset)",
                Arithmetic(arithmetic::ands),
            ),
            Instruction::new(
                "ORR",
                "Bitwise inclusive OR of registers Rm and Rn into Rd",
                Arithmetic(arithmetic::orr),
            ),
            Instruction::new(
                "EOR",
                "Bitwise exclusive OR of registers Rm and Rn into Rd",
                Arithmetic(arithmetic::eor),
            ),
            Instruction::new(
                "LSL",
                "Logical shift left of register Rn by the shift amount into Rd",
                Arithmetic(arithmetic::lsl),
            ),
            Instruction::new(
                "LSR",
                "Logical shift right of register Rn by the shift amount into Rd",
                Arithmetic(arithmetic::lsr),
            ),
            //// Immediate format ////
            Instruction::new(
                "ADDI",
                "Adds register Rn and a constant into Rd without setting flags",
                Immediate(immediate::addi),
            ),
            Instruction::new(
                "ADDIS",
                "Adds register Rn and a constant into Rd and sets the flags",
                Immediate(immediate::addis),
            ),
            Instruction::new(
                "SUBI",
                "Subtracts a constant from register Rn into Rd without setting flags",
                Immediate(immediate::subi),
            ),
            Instruction::new(
                "SUBIS",
                "Subtracts a constant from register Rn into Rd and sets the flags",
                Immediate(immediate::subis),
            ),
            Instruction::new(
                "ANDI",
                "Bitwise AND of register Rn and a constant into Rd",
                Immediate(immediate::andi),
            ),
            Instruction::new(
                "ANDIS",
                "Bitwise AND of register Rn and a constant into Rd (flag-neutral in this subset)",
                Immediate(immediate::andis),
            ),
            Instruction::new(
                "ORRI",
                "Bitwise inclusive OR of register Rn and a constant into Rd",
                Immediate(immediate::orri),
            ),
            Instruction::new(
                "EORI",
                "Bitwise exclusive OR of register Rn and a constant into Rd",
                Immediate(immediate::eori),
            ),
            //// Branch format ////
            Instruction::new("B", "Branch unconditionally", Branch(branch::b)),
            Instruction::new("B.EQ", "Branch if equal", Branch(branch::beq)),
            Instruction::new("B.NE", "Branch if not equal", Branch(branch::bne)),
            Instruction::new("B.LT", "Branch if signed less than", Branch(branch::blt)),
            Instruction::new("B.LE", "Branch if signed less or equal", Branch(branch::ble)),
            Instruction::new("B.GT", "Branch if signed greater than", Branch(branch::bgt)),
            Instruction::new(
                "B.GE",
                "Branch if signed greater or equal",
                Branch(branch::bge),
            ),
            Instruction::new("B.MI", "Branch on minus", Branch(branch::bmi)),
            Instruction::new("B.PL", "Branch on plus", Branch(branch::bpl)),
            Instruction::new("B.VS", "Branch on overflow set", Branch(branch::bvs)),
            Instruction::new("B.VC", "Branch on overflow clear", Branch(branch::bvc)),
            //// Conditional branch on register ////
            Instruction::new(
                "CBNZ",
                "Compare register Rt and branch if not zero",
                CondBranchOnReg(cond_branch::cbnz),
            ),
            //// Data-transfer format ////
            Instruction::new(
                "LDUR",
                "Load a doubleword from memory into register Rt",
                DataTransfer(data_transfer::ldur),
            ),
            Instruction::new(
                "LDURB",
                "Load a byte from memory into register Rt, zero-extended",
                DataTransfer(data_transfer::ldurb),
            ),
            Instruction::new(
                "LDURH",
                "Load a halfword from memory into register Rt, zero-extended",
                DataTransfer(data_transfer::ldurh),
            ),
            Instruction::new(
                "LDURSW",
                "Load a word from memory into register Rt, sign-extended",
                DataTransfer(data_transfer::ldursw),
            ),
            Instruction::new(
                "STUR",
                "Store a doubleword from register Rt into memory",
                DataTransfer(data_transfer::stur),
            ),
            Instruction::new(
                "STURB",
                "Store the low byte of register Rt into memory",
                DataTransfer(data_transfer::sturb),
            ),
            Instruction::new(
                "STURH",
                "Store the low halfword of register Rt into memory",
                DataTransfer(data_transfer::sturh),
            ),
            Instruction::new(
                "STURW",
                "Store the low word of register Rt into memory",
                DataTransfer(data_transfer::sturw),
            ),
        ];

        let mut catalog = Self::new();
        for instruction in table {
            catalog.register(instruction)?;
        }
        debug!(count = catalog.len(), "instruction catalog populated");
        Ok(catalog)
    }
}

impl fmt::Display for InstructionCatalog {
    /// Renders the name/format/description table used by help surfaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<8} {:<16} {}", "Name", "Format", "Description")?;
        for instruction in self.list() {
            writeln!(
                f,
                "{:<8} {:<16} {}",
                instruction.mnemonic(),
                instruction.format().to_string(),
                instruction.description()
            )?;
        }
        Ok(())
    }
}
