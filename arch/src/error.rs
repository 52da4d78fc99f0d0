use thiserror::Error;

use crate::immediate::MAX_IMMEDIATE_SIZE;
use crate::instruction::MAX_OPCODE_SIZE;
use crate::memory_access::MAX_ACCESS_SIZE;

/// Rejections raised by the architecture-level constructors.
///
/// The display text is the only part of these errors that crosses the
/// dispatch boundary; embedders never see the variants themselves.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArchError {
    #[error("immediate size must be between 1 and {max} bytes, got {size}", max = MAX_IMMEDIATE_SIZE)]
    InvalidImmediateSize { size: u64 },

    #[error("immediate value {value:#x} does not fit in {size} byte(s)")]
    ImmediateOverflow { value: u64, size: u64 },

    #[error("instruction opcode cannot exceed {max} bytes, got {len}", max = MAX_OPCODE_SIZE)]
    OpcodeTooLong { len: usize },

    #[error("memory access size must be between 1 and {max} bytes, got {size}", max = MAX_ACCESS_SIZE)]
    InvalidAccessSize { size: u64 },

    #[error("invalid architecture id {id}")]
    InvalidArchitecture { id: u64 },
}
