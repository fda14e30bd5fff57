//! Integration tests for the write-back multiplexer.

use rv32i_datapath::core::datapath::signals::WbSel;
use rv32i_datapath::core::units::wb_mux::WbMux;

/// Tests each source.
#[test]
fn test_wb_select() {
    assert_eq!(WbMux::select(WbSel::Alu, 1, 2, 3), 1);
    assert_eq!(WbMux::select(WbSel::Load, 1, 2, 3), 2);
    assert_eq!(WbMux::select(WbSel::Pc4, 1, 2, 3), 3);
}

/// Tests the wire-encoded selector, including the unused code.
#[test]
fn test_wb_select_raw() {
    assert_eq!(WbMux::select_raw(0, 10, 20, 30), 10);
    assert_eq!(WbMux::select_raw(1, 10, 20, 30), 20);
    assert_eq!(WbMux::select_raw(2, 10, 20, 30), 30);
    assert_eq!(WbMux::select_raw(3, 10, 20, 30), 0);
    assert_eq!(WbSel::from_bits(3), None);
}
