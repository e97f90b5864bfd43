// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! PCC slot assignments and clock source tables.
//!
//! Every PCC block is a flat array of 32-bit control words, one per
//! peripheral. The tables below list the slots that exist on the i.MX8ULP,
//! what each slot can do, and which CGC outputs each clock family can select.
//! They mirror the reference manual and must not change at runtime.

use crate::cgc::CgcClk;

pub const PCC3_BASE: usize = 0x292d_0000;
pub const PCC4_BASE: usize = 0x2980_0000;
pub const PCC5_BASE: usize = 0x2da7_0000;

/// Which set of CGC outputs a slot's `PCS` field indexes into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// No `PCS` field; the peripheral runs from its bus clock.
    None,
    /// Platform (functional) clock family.
    PerPlatform,
    /// Bus clock family.
    PerBus,
}

/// Static description of one PCC slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PccSlot {
    pub base: usize,
    pub slot: u32,
    pub source: SourceKind,
    pub has_divider: bool,
    /// The slot has an active-low software reset (`SWRST`).
    pub has_reset: bool,
}

impl PccSlot {
    const fn new(
        base: usize,
        slot: u32,
        source: SourceKind,
        has_divider: bool,
        has_reset: bool,
    ) -> PccSlot {
        PccSlot {
            base,
            slot,
            source,
            has_divider,
            has_reset,
        }
    }

    /// Physical address of the slot's control word.
    pub const fn address(&self) -> usize {
        self.base + (self.slot as usize) * 4
    }
}

/// CGC outputs selectable through `PCS`, indexed by the field value.
///
/// `None` marks positions that route no clock: index 0 is the hardware "off"
/// position in every table, other `None` entries are reserved.
pub type SourceTable = [Option<CgcClk>; 8];

const DIV: bool = true;
const NO_DIV: bool = false;
const RST: bool = true;
const NO_RST: bool = false;

use SourceKind::{None as NoPcs, PerBus, PerPlatform};

/// Slot numbers of PCC3 (real-time domain).
pub mod pcc3 {
    pub const DMA1_MP: u32 = 1;
    pub const MU0_B: u32 = 34;
    pub const MU3_A: u32 = 35;
    pub const LLWU1: u32 = 38;
    pub const UPOWER: u32 = 40;
    pub const WDOG3: u32 = 42;
    pub const WDOG4: u32 = 43;
    pub const XRDC_MGR: u32 = 47;
    pub const SEMA42_1: u32 = 48;
    pub const ROMCP1: u32 = 49;
    pub const LPIT1: u32 = 50;
    pub const TPM4: u32 = 51;
    pub const TPM5: u32 = 52;
    pub const FLEXIO1: u32 = 53;
    pub const I3C2: u32 = 54;
    pub const LPI2C4: u32 = 55;
    pub const LPI2C5: u32 = 56;
    pub const LPUART4: u32 = 57;
    pub const LPUART5: u32 = 58;
    pub const LPSPI4: u32 = 59;
    pub const LPSPI5: u32 = 60;
}

/// Slot numbers of PCC4 (application domain, peripheral bridge 1).
pub mod pcc4 {
    pub const FLEXSPI2: u32 = 1;
    pub const TPM6: u32 = 2;
    pub const TPM7: u32 = 3;
    pub const LPI2C6: u32 = 4;
    pub const LPI2C7: u32 = 5;
    pub const LPUART6: u32 = 6;
    pub const LPUART7: u32 = 7;
    pub const SAI4: u32 = 8;
    pub const SAI5: u32 = 9;
    pub const PCTLE: u32 = 10;
    pub const PCTLF: u32 = 11;
    pub const SDHC0: u32 = 13;
    pub const SDHC1: u32 = 14;
    pub const SDHC2: u32 = 15;
    pub const USB0: u32 = 16;
    pub const USB0_PHY: u32 = 17;
    pub const USB1: u32 = 18;
    pub const USB1_PHY: u32 = 19;
    pub const USB_XBAR: u32 = 20;
    pub const ENET: u32 = 21;
    pub const RGPIOE: u32 = 30;
    pub const RGPIOF: u32 = 31;
}

/// Slot numbers of PCC5 (audio/video domain).
pub mod pcc5 {
    pub const TPM8: u32 = 0;
    pub const SAI6: u32 = 1;
    pub const SAI7: u32 = 2;
    pub const SPDIF: u32 = 3;
    pub const ISI: u32 = 4;
    pub const CSI_REGS: u32 = 5;
    pub const CSI: u32 = 7;
    pub const DSI: u32 = 8;
    pub const WDOG5: u32 = 10;
    pub const EPDC: u32 = 11;
    pub const PXP: u32 = 12;
    pub const GPU2D: u32 = 15;
    pub const GPU3D: u32 = 16;
    pub const DC_NANO: u32 = 17;
    pub const CSI_CLK_UI: u32 = 20;
    pub const CSI_CLK_ESC: u32 = 21;
    pub const RGPIOD: u32 = 22;
    pub const MU1_B: u32 = 23;
    pub const SEMA42_2: u32 = 24;
    pub const MU3_B: u32 = 25;
    pub const PCTLD: u32 = 26;
}

pub(crate) static PCC3_SLOTS: &[PccSlot] = &[
    PccSlot::new(PCC3_BASE, pcc3::DMA1_MP, NoPcs, NO_DIV, NO_RST),
    PccSlot::new(PCC3_BASE, pcc3::MU0_B, NoPcs, NO_DIV, RST),
    PccSlot::new(PCC3_BASE, pcc3::MU3_A, NoPcs, NO_DIV, RST),
    PccSlot::new(PCC3_BASE, pcc3::LLWU1, NoPcs, NO_DIV, RST),
    PccSlot::new(PCC3_BASE, pcc3::UPOWER, NoPcs, NO_DIV, RST),
    PccSlot::new(PCC3_BASE, pcc3::WDOG3, PerBus, DIV, RST),
    PccSlot::new(PCC3_BASE, pcc3::WDOG4, PerBus, DIV, RST),
    PccSlot::new(PCC3_BASE, pcc3::XRDC_MGR, NoPcs, NO_DIV, NO_RST),
    PccSlot::new(PCC3_BASE, pcc3::SEMA42_1, NoPcs, NO_DIV, RST),
    PccSlot::new(PCC3_BASE, pcc3::ROMCP1, NoPcs, NO_DIV, NO_RST),
    PccSlot::new(PCC3_BASE, pcc3::LPIT1, PerBus, DIV, RST),
    PccSlot::new(PCC3_BASE, pcc3::TPM4, PerBus, DIV, RST),
    PccSlot::new(PCC3_BASE, pcc3::TPM5, PerBus, DIV, RST),
    PccSlot::new(PCC3_BASE, pcc3::FLEXIO1, PerBus, DIV, RST),
    PccSlot::new(PCC3_BASE, pcc3::I3C2, PerBus, DIV, RST),
    PccSlot::new(PCC3_BASE, pcc3::LPI2C4, PerBus, DIV, RST),
    PccSlot::new(PCC3_BASE, pcc3::LPI2C5, PerBus, DIV, RST),
    PccSlot::new(PCC3_BASE, pcc3::LPUART4, PerBus, DIV, RST),
    PccSlot::new(PCC3_BASE, pcc3::LPUART5, PerBus, DIV, RST),
    PccSlot::new(PCC3_BASE, pcc3::LPSPI4, PerBus, DIV, RST),
    PccSlot::new(PCC3_BASE, pcc3::LPSPI5, PerBus, DIV, RST),
];

pub(crate) static PCC4_SLOTS: &[PccSlot] = &[
    PccSlot::new(PCC4_BASE, pcc4::FLEXSPI2, PerPlatform, DIV, RST),
    PccSlot::new(PCC4_BASE, pcc4::TPM6, PerBus, DIV, RST),
    PccSlot::new(PCC4_BASE, pcc4::TPM7, PerBus, DIV, RST),
    PccSlot::new(PCC4_BASE, pcc4::LPI2C6, PerBus, DIV, RST),
    PccSlot::new(PCC4_BASE, pcc4::LPI2C7, PerBus, DIV, RST),
    PccSlot::new(PCC4_BASE, pcc4::LPUART6, PerBus, DIV, RST),
    PccSlot::new(PCC4_BASE, pcc4::LPUART7, PerBus, DIV, RST),
    PccSlot::new(PCC4_BASE, pcc4::SAI4, NoPcs, NO_DIV, RST),
    PccSlot::new(PCC4_BASE, pcc4::SAI5, NoPcs, NO_DIV, RST),
    PccSlot::new(PCC4_BASE, pcc4::PCTLE, NoPcs, NO_DIV, NO_RST),
    PccSlot::new(PCC4_BASE, pcc4::PCTLF, NoPcs, NO_DIV, NO_RST),
    PccSlot::new(PCC4_BASE, pcc4::SDHC0, PerPlatform, DIV, RST),
    PccSlot::new(PCC4_BASE, pcc4::SDHC1, PerPlatform, DIV, RST),
    PccSlot::new(PCC4_BASE, pcc4::SDHC2, PerPlatform, DIV, RST),
    PccSlot::new(PCC4_BASE, pcc4::USB0, NoPcs, NO_DIV, RST),
    PccSlot::new(PCC4_BASE, pcc4::USB0_PHY, NoPcs, NO_DIV, RST),
    PccSlot::new(PCC4_BASE, pcc4::USB1, NoPcs, NO_DIV, RST),
    PccSlot::new(PCC4_BASE, pcc4::USB1_PHY, NoPcs, NO_DIV, RST),
    PccSlot::new(PCC4_BASE, pcc4::USB_XBAR, NoPcs, NO_DIV, RST),
    PccSlot::new(PCC4_BASE, pcc4::ENET, NoPcs, NO_DIV, RST),
    PccSlot::new(PCC4_BASE, pcc4::RGPIOE, NoPcs, NO_DIV, NO_RST),
    PccSlot::new(PCC4_BASE, pcc4::RGPIOF, NoPcs, NO_DIV, NO_RST),
];

pub(crate) static PCC5_SLOTS: &[PccSlot] = &[
    PccSlot::new(PCC5_BASE, pcc5::TPM8, PerBus, DIV, RST),
    PccSlot::new(PCC5_BASE, pcc5::SAI6, PerBus, DIV, RST),
    PccSlot::new(PCC5_BASE, pcc5::SAI7, PerBus, DIV, RST),
    PccSlot::new(PCC5_BASE, pcc5::SPDIF, PerBus, DIV, RST),
    PccSlot::new(PCC5_BASE, pcc5::ISI, NoPcs, NO_DIV, RST),
    PccSlot::new(PCC5_BASE, pcc5::CSI_REGS, NoPcs, NO_DIV, RST),
    PccSlot::new(PCC5_BASE, pcc5::CSI, PerPlatform, DIV, RST),
    PccSlot::new(PCC5_BASE, pcc5::DSI, PerPlatform, DIV, RST),
    PccSlot::new(PCC5_BASE, pcc5::WDOG5, PerBus, DIV, RST),
    PccSlot::new(PCC5_BASE, pcc5::EPDC, PerPlatform, DIV, RST),
    PccSlot::new(PCC5_BASE, pcc5::PXP, NoPcs, NO_DIV, RST),
    PccSlot::new(PCC5_BASE, pcc5::GPU2D, PerPlatform, DIV, RST),
    PccSlot::new(PCC5_BASE, pcc5::GPU3D, PerPlatform, DIV, RST),
    PccSlot::new(PCC5_BASE, pcc5::DC_NANO, PerPlatform, DIV, RST),
    PccSlot::new(PCC5_BASE, pcc5::CSI_CLK_UI, PerPlatform, DIV, RST),
    PccSlot::new(PCC5_BASE, pcc5::CSI_CLK_ESC, PerPlatform, DIV, RST),
    PccSlot::new(PCC5_BASE, pcc5::RGPIOD, NoPcs, NO_DIV, NO_RST),
    PccSlot::new(PCC5_BASE, pcc5::MU1_B, NoPcs, NO_DIV, RST),
    PccSlot::new(PCC5_BASE, pcc5::SEMA42_2, NoPcs, NO_DIV, RST),
    PccSlot::new(PCC5_BASE, pcc5::MU3_B, NoPcs, NO_DIV, RST),
    PccSlot::new(PCC5_BASE, pcc5::PCTLD, NoPcs, NO_DIV, NO_RST),
];

// The order of every table below is the PCS encoding.

pub(crate) static PCC3_BUS_SOURCES: SourceTable = [
    None,
    Some(CgcClk::Lposc),
    Some(CgcClk::SoscDiv2),
    Some(CgcClk::FroscDiv2),
    Some(CgcClk::XbarBusClk),
    Some(CgcClk::Pll3Pfd1Div1),
    Some(CgcClk::Pll3Pfd0Div2),
    Some(CgcClk::Pll3Pfd0Div1),
];

pub(crate) static PCC4_PLAT_SOURCES: SourceTable = [
    None,
    Some(CgcClk::SoscDiv1),
    Some(CgcClk::FroscDiv1),
    Some(CgcClk::Pll3Pfd3Div2),
    Some(CgcClk::Pll3Pfd3Div1),
    Some(CgcClk::Pll3Pfd2Div2),
    Some(CgcClk::Pll3Pfd2Div1),
    Some(CgcClk::Pll3Pfd1Div2),
];

pub(crate) static PCC4_BUS_SOURCES: SourceTable = [
    None,
    None,
    Some(CgcClk::Lposc),
    Some(CgcClk::SoscDiv2),
    Some(CgcClk::FroscDiv2),
    Some(CgcClk::XbarBusClk),
    Some(CgcClk::Pll3VcoDiv),
    Some(CgcClk::Pll3Pfd0Div1),
];

pub(crate) static PCC5_PLAT_SOURCES: SourceTable = [
    None,
    Some(CgcClk::Pll4Pfd3Div2),
    Some(CgcClk::Pll4Pfd2Div2),
    Some(CgcClk::Pll4Pfd2Div1),
    Some(CgcClk::Pll4Pfd1Div2),
    Some(CgcClk::Pll4Pfd1Div1),
    Some(CgcClk::Pll4Pfd0Div2),
    Some(CgcClk::Pll4Pfd0Div1),
];

pub(crate) static PCC5_BUS_SOURCES: SourceTable = [
    None,
    None,
    Some(CgcClk::Lposc),
    Some(CgcClk::SoscDiv2),
    Some(CgcClk::FroscDiv2),
    Some(CgcClk::LpavBusClk),
    Some(CgcClk::Pll4VcoDiv),
    Some(CgcClk::Pll4Pfd3Div1),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn check_table(base: usize, table: &[PccSlot]) {
        for (i, entry) in table.iter().enumerate() {
            assert_eq!(entry.base, base, "slot {} has the wrong base", entry.slot);
            assert!(
                table[i + 1..].iter().all(|e| e.slot != entry.slot),
                "slot {} listed twice",
                entry.slot
            );
            // A divider only makes sense behind a selectable source.
            assert!(!entry.has_divider || entry.source != SourceKind::None);
        }
    }

    #[test]
    fn tables_are_consistent() {
        check_table(PCC3_BASE, PCC3_SLOTS);
        check_table(PCC4_BASE, PCC4_SLOTS);
        check_table(PCC5_BASE, PCC5_SLOTS);
    }

    #[test]
    fn slot_address() {
        let lpuart5 = PCC3_SLOTS
            .iter()
            .find(|e| e.slot == pcc3::LPUART5)
            .unwrap();
        assert_eq!(lpuart5.address(), 0x292d_00e8);

        let tpm8 = PCC5_SLOTS.iter().find(|e| e.slot == pcc5::TPM8).unwrap();
        assert_eq!(tpm8.address(), PCC5_BASE);
    }

    #[test]
    fn position_zero_is_off() {
        for table in [
            &PCC3_BUS_SOURCES,
            &PCC4_PLAT_SOURCES,
            &PCC4_BUS_SOURCES,
            &PCC5_PLAT_SOURCES,
            &PCC5_BUS_SOURCES,
        ] {
            assert_eq!(table[0], None);
        }
    }
}
