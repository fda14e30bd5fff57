//! Write-back source multiplexer.

use crate::core::datapath::signals::WbSel;

/// Selects the value written to the destination register.
pub struct WbMux;

impl WbMux {
    /// Returns the source chosen by `sel`.
    pub fn select(sel: WbSel, alu_result: u32, load_data: u32, pc_plus4: u32) -> u32 {
        match sel {
            WbSel::Alu => alu_result,
            WbSel::Load => load_data,
            WbSel::Pc4 => pc_plus4,
        }
    }

    /// Same as [`WbMux::select`] but driven by the 2-bit wire encoding.
    /// The unused encoding selects the constant 0.
    pub fn select_raw(bits: u8, alu_result: u32, load_data: u32, pc_plus4: u32) -> u32 {
        WbSel::from_bits(bits)
            .map(|sel| Self::select(sel, alu_result, load_data, pc_plus4))
            .unwrap_or(0)
    }
}
