#[cfg(test)]
mod tests {
    use crate::{ArchError, Architecture, ExecutionContext, Immediate, Instruction, MemoryAccess};

    #[test]
    fn test_immediate_fits_width() {
        let imm = Immediate::with_size(255, 1).unwrap();
        assert_eq!(imm.value(), 255);
        assert_eq!(imm.size(), 1);
        assert_eq!(imm.bit_size(), 8);
    }

    #[test]
    fn test_immediate_overflows_width() {
        let err = Immediate::with_size(256, 1).unwrap_err();
        assert_eq!(
            err,
            ArchError::ImmediateOverflow {
                value: 256,
                size: 1
            }
        );
    }

    #[test]
    fn test_immediate_size_range() {
        assert!(Immediate::with_size(0, 0).is_err());
        assert!(Immediate::with_size(0, 9).is_err());
        // Full-width value in a full-width immediate is fine.
        let imm = Immediate::with_size(u64::MAX, 8).unwrap();
        assert_eq!(imm.value(), u64::MAX);
    }

    #[test]
    fn test_immediate_fitting_boundaries() {
        assert_eq!(Immediate::fitting(0).size(), 1);
        assert_eq!(Immediate::fitting(0xFF).size(), 1);
        assert_eq!(Immediate::fitting(0x100).size(), 2);
        assert_eq!(Immediate::fitting(0xFFFF).size(), 2);
        assert_eq!(Immediate::fitting(0x1_0000).size(), 4);
        assert_eq!(Immediate::fitting(0xFFFF_FFFF).size(), 4);
        assert_eq!(Immediate::fitting(0x1_0000_0000).size(), 8);
        assert_eq!(Immediate::fitting(u64::MAX).size(), 8);
    }

    #[test]
    fn test_instruction_default_is_empty() {
        let inst = Instruction::new();
        assert_eq!(inst.address(), 0);
        assert_eq!(inst.size(), 0);
        assert!(inst.opcode().is_empty());
    }

    #[test]
    fn test_instruction_opcode_cap() {
        assert!(Instruction::from_opcode(&[0x90; 16]).is_ok());
        let err = Instruction::from_opcode(&[0x90; 17]).unwrap_err();
        assert_eq!(err, ArchError::OpcodeTooLong { len: 17 });
    }

    #[test]
    fn test_instruction_at_address() {
        let inst = Instruction::at_address(0x1000, &[0x48, 0x31, 0xC0]).unwrap();
        assert_eq!(inst.address(), 0x1000);
        assert_eq!(inst.opcode(), &[0x48, 0x31, 0xC0]);
        assert_eq!(inst.size(), 3);
    }

    #[test]
    fn test_memory_access_size_range() {
        let mem = MemoryAccess::at(0x2000, 8).unwrap();
        assert_eq!(mem.address(), 0x2000);
        assert_eq!(mem.size(), 8);

        assert_eq!(
            MemoryAccess::at(0x2000, 0).unwrap_err(),
            ArchError::InvalidAccessSize { size: 0 }
        );
        assert_eq!(
            MemoryAccess::at(0x2000, 65).unwrap_err(),
            ArchError::InvalidAccessSize { size: 65 }
        );
        assert!(MemoryAccess::at(0, 64).is_ok());
    }

    #[test]
    fn test_architecture_ids_round_trip() {
        for id in 1..=4 {
            let arch = Architecture::from_id(id).unwrap();
            assert_eq!(arch.id(), id);
        }
        assert!(Architecture::from_id(0).is_err());
        assert!(Architecture::from_id(5).is_err());
    }

    #[test]
    fn test_architecture_pointer_sizes() {
        assert_eq!(Architecture::X86_64.pointer_size(), 8);
        assert_eq!(Architecture::AArch64.pointer_size(), 8);
        assert_eq!(Architecture::X86.pointer_size(), 4);
        assert_eq!(Architecture::Arm32.pointer_size(), 4);
    }

    #[test]
    fn test_context_architecture_selection() {
        let mut ctx = ExecutionContext::new();
        assert!(!ctx.is_architecture_valid());
        assert_eq!(ctx.architecture(), None);

        ctx.set_architecture(Architecture::X86_64);
        assert!(ctx.is_architecture_valid());
        assert_eq!(ctx.architecture(), Some(Architecture::X86_64));

        let pre = ExecutionContext::with_architecture(Architecture::Arm32);
        assert_eq!(pre.architecture(), Some(Architecture::Arm32));
    }

    #[test]
    fn test_error_messages_name_the_limit() {
        let msg = Immediate::with_size(1, 12).unwrap_err().to_string();
        assert!(msg.contains("between 1 and 8"), "unexpected message: {msg}");

        let msg = MemoryAccess::at(0, 100).unwrap_err().to_string();
        assert!(msg.contains("between 1 and 64"), "unexpected message: {msg}");

        let msg = Architecture::from_id(99).unwrap_err().to_string();
        assert!(msg.contains("99"), "unexpected message: {msg}");
    }
}
