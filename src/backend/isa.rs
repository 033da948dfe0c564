//! Target instruction set for the three-register stack-less VM.
//!
//! The machine has two general registers (`A`, `B`) and a word-addressed memory bank `M`. Every
//! instruction renders as exactly one line of assembly text via [`Display`](std::fmt::Display).
//!
//! ## Encoding reference
//!
//! | Instruction            | Text              | Effect                                  |
//! |------------------------|-------------------|-----------------------------------------|
//! | `LoadImm(A, n)`        | `ldi A n`         | `A := n`                                |
//! | `Load(A, s)`           | `mov A M s`       | `A := M[s]`                             |
//! | `Store(s)`             | `mov M A s`       | `M[s] := A`                             |
//! | `Add` / `Sub`          | `add` / `sub`     | `A := A + B` / `A := A - B`             |
//! | `Cmp`                  | `cmp`             | `A := 0` if `A == B`, else `A := 1`     |
//! | `Jnz(l)`               | `jnz %l`          | jump to `l` if `A != 0`                 |
//! | `Jmp(l)`               | `jmp %l`          | unconditional jump                      |
//! | `Label(l)`             | `l:`              | jump target                             |
//! | `Halt`                 | `hlt`             | stop                                    |
//!
//! `cmp` produces zero on equality, so `jnz` after `cmp` is taken exactly when the operands differ.

use std::fmt;

/// Section directive that opens a wrapped program.
pub const TEXT_SECTION: &str = ".text";

/// Memory slot reserved as spill space for compound right operands. Never assigned to a variable.
pub const SCRATCH_SLOT: Slot = Slot(0);

/// First slot handed out to a variable.
pub const FIRST_VARIABLE_SLOT: Slot = Slot(1);

/// A general-purpose register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    A,
    B,
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Register::A => f.write_str("A"),
            Register::B => f.write_str("B"),
        }
    }
}

/// Index into the memory bank `M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(pub u32);

impl Slot {
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which half of an `if` a label marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKind {
    Else,
    EndIf,
}

/// A jump target: `else_N` or `endif_N`.
///
/// Both labels of one `if` share the same `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label {
    pub kind: LabelKind,
    pub id: u32,
}

impl Label {
    pub fn else_(id: u32) -> Self {
        Self { kind: LabelKind::Else, id }
    }

    pub fn endif(id: u32) -> Self {
        Self {
            kind: LabelKind::EndIf,
            id,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LabelKind::Else => write!(f, "else_{}", self.id),
            LabelKind::EndIf => write!(f, "endif_{}", self.id),
        }
    }
}

/// One line of target assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    LoadImm(Register, i64),
    Load(Register, Slot),
    Store(Slot),
    Add,
    Sub,
    Cmp,
    Jnz(Label),
    Jmp(Label),
    Label(Label),
    /// Only emitted by the program wrapper, never by statement lowering.
    Halt,
}

impl Instruction {
    /// Return `true` for label definitions (`else_0:`), which occupy a line but execute nothing.
    pub fn is_label(&self) -> bool {
        matches!(self, Instruction::Label(_))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::LoadImm(reg, value) => write!(f, "ldi {} {}", reg, value),
            Instruction::Load(reg, slot) => write!(f, "mov {} M {}", reg, slot),
            Instruction::Store(slot) => write!(f, "mov M A {}", slot),
            Instruction::Add => f.write_str("add"),
            Instruction::Sub => f.write_str("sub"),
            Instruction::Cmp => f.write_str("cmp"),
            Instruction::Jnz(label) => write!(f, "jnz %{}", label),
            Instruction::Jmp(label) => write!(f, "jmp %{}", label),
            Instruction::Label(label) => write!(f, "{}:", label),
            Instruction::Halt => f.write_str("hlt"),
        }
    }
}
