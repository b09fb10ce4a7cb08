use std::fmt;

/// Number of scratch registers on the target machine (R0..R7).
pub const REGISTER_COUNT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Register(u8);

impl Register {
    /// `None` when `index` is outside the register file.
    pub fn new(index: usize) -> Option<Register> {
        if index < REGISTER_COUNT {
            Some(Register(index as u8))
        } else {
            None
        }
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

/// Chooses registers for the code generator. Every load goes through this
/// trait so a real allocator can replace the fixed convention.
pub trait ScratchRegisters {
    /// Register for a single value load (declarations, references, tests).
    fn scratch(&mut self) -> Register;

    /// Register carrying positional argument `index` of a call, or `None`
    /// when the machine has no register for it.
    fn argument(&mut self, index: usize) -> Option<Register>;
}

/// The fixed convention: single loads use R0, argument `k` uses R`k`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedScratch;

impl ScratchRegisters for FixedScratch {
    fn scratch(&mut self) -> Register {
        Register(0)
    }

    fn argument(&mut self, index: usize) -> Option<Register> {
        Register::new(index)
    }
}
