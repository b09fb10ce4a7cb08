use crate::codegen::core::registers::Register;
use std::fmt;

pub mod control_flow;

/// One instruction of the abstract 8-register machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instr {
    /// `LOAD Rn, operand` where operand is a literal or a variable name.
    Load { dst: Register, src: String },
    /// `STORE Rn, name`
    Store { src: Register, dst: String },
    /// `JZ Rn, label` jumps when the register holds zero.
    Jz { cond: Register, target: String },
    Jmp { target: String },
    Call { target: String },
    Ret,
}

impl fmt::Display for Instr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instr::Load { dst, src } => write!(f, "LOAD {}, {}", dst, src),
            Instr::Store { src, dst } => write!(f, "STORE {}, {}", src, dst),
            Instr::Jz { cond, target } => write!(f, "JZ {}, {}", cond, target),
            Instr::Jmp { target } => write!(f, "JMP {}", target),
            Instr::Call { target } => write!(f, "CALL {}", target),
            Instr::Ret => f.write_str("RET"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsmLine {
    Label(String),
    Instr(Instr),
}

impl fmt::Display for AsmLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AsmLine::Label(name) => write!(f, "{}:", name),
            AsmLine::Instr(instr) => write!(f, "{}", instr),
        }
    }
}

/// Emitted lines in order. Lines are only ever appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyProgram {
    lines: Vec<AsmLine>,
}

impl AssemblyProgram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, instr: Instr) {
        self.lines.push(AsmLine::Instr(instr));
    }

    pub fn push_label(&mut self, name: impl Into<String>) {
        self.lines.push(AsmLine::Label(name.into()));
    }

    pub fn lines(&self) -> &[AsmLine] {
        &self.lines
    }

    /// Names of all label definitions, in emission order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().filter_map(|line| match line {
            AsmLine::Label(name) => Some(name.as_str()),
            AsmLine::Instr(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for AssemblyProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
