use arch::{Architecture, ExecutionContext, Immediate, Instruction, MemoryAccess};

use crate::error::ConstructError;
use crate::extract::{extract, Slot};
use crate::resolve::{resolve, Variant};
use crate::value::{Shape, Value};

/// A freshly constructed architecture value.
///
/// Returned by value: ownership moves to the embedder and the dispatch
/// layer retains no reference.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Immediate(Immediate),
    Instruction(Instruction),
    MemoryAccess(MemoryAccess),
    Context(ExecutionContext),
}

pub(crate) const IMMEDIATE_VARIANTS: &[Variant] = &[&[], &[Shape::Uint], &[Shape::Uint, Shape::Uint]];
pub(crate) const INSTRUCTION_VARIANTS: &[Variant] = &[&[], &[Shape::Bytes], &[Shape::Uint, Shape::Bytes]];
pub(crate) const MEMORY_ACCESS_VARIANTS: &[Variant] = &[&[], &[Shape::Uint, Shape::Uint]];
pub(crate) const CONTEXT_VARIANTS: &[Variant] = &[&[], &[Shape::Uint]];

/// `Immediate()`, `Immediate(value)`, `Immediate(value, size)`.
///
/// With one integer the narrowest fitting power-of-two width is used; with
/// two, the second integer is the width in bytes and the value must fit.
pub fn immediate(args: &[Value]) -> Result<Object, ConstructError> {
    let slots = extract("Immediate", args, 2)?;
    let imm = match resolve("Immediate", IMMEDIATE_VARIANTS, &slots)? {
        0 => Immediate::new(),
        1 => Immediate::fitting(uint_arg("Immediate", &slots, 0)?),
        _ => Immediate::with_size(
            uint_arg("Immediate", &slots, 0)?,
            uint_arg("Immediate", &slots, 1)?,
        )?,
    };
    Ok(Object::Immediate(imm))
}

/// `Instruction()`, `Instruction(opcode)`, `Instruction(address, opcode)`.
///
/// A lone integer is rejected rather than read as an address: an
/// address-only instruction has no bytes to decode.
pub fn instruction(args: &[Value]) -> Result<Object, ConstructError> {
    let slots = extract("Instruction", args, 2)?;
    let inst = match resolve("Instruction", INSTRUCTION_VARIANTS, &slots)? {
        0 => Instruction::new(),
        1 => Instruction::from_opcode(bytes_arg("Instruction", &slots, 0)?)?,
        _ => Instruction::at_address(
            uint_arg("Instruction", &slots, 0)?,
            bytes_arg("Instruction", &slots, 1)?,
        )?,
    };
    Ok(Object::Instruction(inst))
}

/// `MemoryAccess()`, `MemoryAccess(address, size)`.
pub fn memory_access(args: &[Value]) -> Result<Object, ConstructError> {
    let slots = extract("MemoryAccess", args, 2)?;
    let mem = match resolve("MemoryAccess", MEMORY_ACCESS_VARIANTS, &slots)? {
        0 => MemoryAccess::new(),
        _ => MemoryAccess::at(
            uint_arg("MemoryAccess", &slots, 0)?,
            uint_arg("MemoryAccess", &slots, 1)?,
        )?,
    };
    Ok(Object::MemoryAccess(mem))
}

/// `ExecutionContext()`, `ExecutionContext(architecture_id)`.
pub fn execution_context(args: &[Value]) -> Result<Object, ConstructError> {
    let slots = extract("ExecutionContext", args, 1)?;
    let ctx = match resolve("ExecutionContext", CONTEXT_VARIANTS, &slots)? {
        0 => ExecutionContext::new(),
        _ => {
            let arch = Architecture::from_id(uint_arg("ExecutionContext", &slots, 0)?)?;
            ExecutionContext::with_architecture(arch)
        }
    };
    Ok(Object::Context(ctx))
}

// --- Coercion helpers ---
//
// Resolution already guaranteed the slot shapes, so these can only fail if
// a variant table and its adapter arm disagree; the failure stays a typed
// error rather than a panic.

fn uint_arg(type_name: &str, slots: &[Slot], pos: usize) -> Result<u64, ConstructError> {
    slots[pos].value.as_uint().ok_or_else(|| {
        ConstructError::InvalidArgumentType(format!(
            "{type_name}(): expects an integer as argument {}",
            pos + 1
        ))
    })
}

fn bytes_arg<'a>(
    type_name: &str,
    slots: &[Slot<'a>],
    pos: usize,
) -> Result<&'a [u8], ConstructError> {
    slots[pos].value.as_bytes().ok_or_else(|| {
        ConstructError::InvalidArgumentType(format!(
            "{type_name}(): expects bytes as argument {}",
            pos + 1
        ))
    })
}
