//! Integration tests for next-PC selection.

use proptest::prelude::*;
use rstest::rstest;
use rv32i_datapath::core::datapath::signals::PcOp;
use rv32i_datapath::core::units::pc::{PcInputs, PcUnit};

fn inputs(pc_op: PcOp) -> PcInputs {
    PcInputs {
        reset: false,
        boot_addr: 0x8000_0000,
        pc: 0x100,
        pc_op,
        branch_target: 0x200,
        jal_target: 0x400,
        jalr_target: 0x301,
    }
}

/// Tests each selector.
#[rstest]
#[case::plus4(PcOp::Plus4, 0x104)]
#[case::branch(PcOp::Branch, 0x200)]
#[case::jal(PcOp::Jal, 0x400)]
#[case::jalr(PcOp::Jalr, 0x300)]
fn test_pc_select(#[case] op: PcOp, #[case] expected: u32) {
    let out = PcUnit::next(&inputs(op));
    assert_eq!(out.next_pc, expected);
    assert_eq!(out.pc_plus4, 0x104);
}

/// Tests that reset overrides every selector.
#[rstest]
#[case(PcOp::Plus4)]
#[case(PcOp::Branch)]
#[case(PcOp::Jal)]
#[case(PcOp::Jalr)]
fn test_pc_reset_wins(#[case] op: PcOp) {
    let out = PcUnit::next(&PcInputs {
        reset: true,
        ..inputs(op)
    });
    assert_eq!(out.next_pc, 0x8000_0000);
}

/// Tests that PC + 4 wraps at the top of the address space.
#[test]
fn test_pc_plus4_wraps() {
    let out = PcUnit::next(&PcInputs {
        pc: 0xFFFF_FFFC,
        ..inputs(PcOp::Plus4)
    });
    assert_eq!(out.next_pc, 0);
    assert_eq!(out.pc_plus4, 0);
}

/// Tests the selector wire encoding.
#[test]
fn test_pc_op_bits() {
    for op in [PcOp::Plus4, PcOp::Branch, PcOp::Jal, PcOp::Jalr] {
        assert_eq!(PcOp::from_bits(op.bits()), op);
    }
}

proptest! {
    /// A JALR target never has bit 0 set.
    #[test]
    fn prop_jalr_target_even(target: u32, pc: u32) {
        let out = PcUnit::next(&PcInputs {
            pc,
            jalr_target: target,
            ..inputs(PcOp::Jalr)
        });
        prop_assert_eq!(out.next_pc, target & !1);
        prop_assert_eq!(out.pc_plus4, pc.wrapping_add(4));
    }
}
