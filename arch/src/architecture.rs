use crate::error::ArchError;

/// Instruction set architectures the engine can model.
///
/// The numeric ids are part of the embedder contract; 0 is reserved as
/// the invalid architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u64)]
pub enum Architecture {
    AArch64 = 1,
    Arm32 = 2,
    X86 = 3,
    X86_64 = 4,
}

impl Architecture {
    /// Decodes a numeric architecture id as supplied by embedders.
    pub fn from_id(id: u64) -> Result<Self, ArchError> {
        match id {
            1 => Ok(Self::AArch64),
            2 => Ok(Self::Arm32),
            3 => Ok(Self::X86),
            4 => Ok(Self::X86_64),
            _ => Err(ArchError::InvalidArchitecture { id }),
        }
    }

    #[inline]
    pub fn id(self) -> u64 {
        self as u64
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::AArch64 => "aarch64",
            Self::Arm32 => "arm32",
            Self::X86 => "x86",
            Self::X86_64 => "x86_64",
        }
    }

    /// Pointer width in bytes.
    pub fn pointer_size(self) -> u32 {
        match self {
            Self::AArch64 | Self::X86_64 => 8,
            Self::Arm32 | Self::X86 => 4,
        }
    }
}
