// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Peripheral Clock Controller (PCC) driver.
//!
//! The i.MX8ULP has three PCC blocks. Each peripheral owns one control word
//! (its *slot*) that gates the peripheral clock, selects the CGC output
//! feeding it, divides that clock and, for most peripherals, holds the
//! peripheral in reset.
//!
//! The hardware imposes a few rules that this driver enforces on every call:
//!
//! - A slot whose `PR` bit is clear does not exist on this part.
//! - A slot with `INUSE` set belongs to another core and is left alone.
//! - `PCS`, `FRAC` and `PCD` may only change while `CGC` is clear.
//!
//! The control word is re-read before every update; another bus master may
//! change it between calls.
//!
//! Usage
//! -----
//!
//! ```rust,ignore
//! use imx8ulp::cgc::CgcClk;
//! use imx8ulp::pcc::PccController::Pcc3;
//! use imx8ulp::pcc_slots::pcc3;
//!
//! let pcc = peripherals.pcc();
//! pcc.clock_enable(Pcc3, pcc3::LPUART5, false)?;
//! pcc.clock_select_source(Pcc3, pcc3::LPUART5, CgcClk::SoscDiv2)?;
//! pcc.clock_divider_config(Pcc3, pcc3::LPUART5, false, 1)?;
//! pcc.clock_enable(Pcc3, pcc3::LPUART5, true)?;
//! pcc.reset_peripheral(Pcc3, pcc3::LPUART5, false)?;
//! debug!("LPUART5 at {}Hz", pcc.clock_rate(Pcc3, pcc3::LPUART5));
//! ```

use kernel::config::CONFIG;
use kernel::debug;
use kernel::platform::chip::ClockInterface;
use kernel::platform::mmio::RegisterIo;
use kernel::utilities::registers::{register_bitfields, LocalRegisterCopy};
use kernel::ErrorCode;

use crate::cgc::{CgcClk, ClockTree};
use crate::pcc_slots::{self, PccSlot, SourceKind, SourceTable};

register_bitfields![u32,
    PCC [
        /// Present: the peripheral exists on this part
        PR OFFSET(31) NUMBITS(1) [],
        /// In use: another bus master has claimed the slot
        INUSE OFFSET(30) NUMBITS(1) [],
        /// Clock gate control
        CGC OFFSET(29) NUMBITS(1) [],
        /// Software reset, active low
        SWRST OFFSET(28) NUMBITS(1) [
            Asserted = 0,
            Released = 1
        ],
        /// Peripheral clock source select
        PCS OFFSET(24) NUMBITS(3) [],
        /// Fractional divide: output is (FRAC + 1) / (PCD + 1) of the source
        FRAC OFFSET(3) NUMBITS(1) [],
        /// Peripheral clock divider, divide by PCD + 1
        PCD OFFSET(0) NUMBITS(3) []
    ]
];

type SlotWord = LocalRegisterCopy<u32, PCC::Register>;

/// Largest ratio `PCD` can encode.
const MAX_DIVIDER: u8 = 8;

/// The three PCC blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PccController {
    Pcc3,
    Pcc4,
    Pcc5,
}

impl PccController {
    /// Controller number as used in the reference manual.
    pub const fn id(self) -> u32 {
        match self {
            PccController::Pcc3 => 3,
            PccController::Pcc4 => 4,
            PccController::Pcc5 => 5,
        }
    }

    pub const fn base(self) -> usize {
        match self {
            PccController::Pcc3 => pcc_slots::PCC3_BASE,
            PccController::Pcc4 => pcc_slots::PCC4_BASE,
            PccController::Pcc5 => pcc_slots::PCC5_BASE,
        }
    }

    /// Every slot this controller implements.
    pub fn slots(self) -> &'static [PccSlot] {
        match self {
            PccController::Pcc3 => pcc_slots::PCC3_SLOTS,
            PccController::Pcc4 => pcc_slots::PCC4_SLOTS,
            PccController::Pcc5 => pcc_slots::PCC5_SLOTS,
        }
    }

    /// The source table a slot of `kind` on this controller indexes into.
    ///
    /// PCC3 has no platform-clocked peripherals, so it has no such table.
    fn sources(self, kind: SourceKind) -> Option<&'static SourceTable> {
        match (self, kind) {
            (_, SourceKind::None) => None,
            (PccController::Pcc3, SourceKind::PerPlatform) => None,
            (PccController::Pcc3, SourceKind::PerBus) => Some(&pcc_slots::PCC3_BUS_SOURCES),
            (PccController::Pcc4, SourceKind::PerPlatform) => Some(&pcc_slots::PCC4_PLAT_SOURCES),
            (PccController::Pcc4, SourceKind::PerBus) => Some(&pcc_slots::PCC4_BUS_SOURCES),
            (PccController::Pcc5, SourceKind::PerPlatform) => Some(&pcc_slots::PCC5_PLAT_SOURCES),
            (PccController::Pcc5, SourceKind::PerBus) => Some(&pcc_slots::PCC5_BUS_SOURCES),
        }
    }
}

impl TryFrom<u32> for PccController {
    type Error = ErrorCode;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        match id {
            3 => Ok(PccController::Pcc3),
            4 => Ok(PccController::Pcc4),
            5 => Ok(PccController::Pcc5),
            _ => Err(ErrorCode::INVAL),
        }
    }
}

/// Find `slot` in the table of `controller`.
///
/// Returns the position of the entry together with the table. Fails with
/// `NODEVICE` if the controller has no such slot.
pub fn find_slot(
    controller: PccController,
    slot: u32,
) -> Result<(usize, &'static [PccSlot]), ErrorCode> {
    let table = controller.slots();
    table
        .iter()
        .position(|entry| entry.slot == slot)
        .map(|index| (index, table))
        .ok_or(ErrorCode::NODEVICE)
}

fn lookup(controller: PccController, slot: u32) -> Result<&'static PccSlot, ErrorCode> {
    let (index, table) = find_slot(controller, slot)?;
    Ok(&table[index])
}

/// The slot exists and no other master holds it.
fn check_owned(word: SlotWord) -> Result<(), ErrorCode> {
    if !word.is_set(PCC::PR) || word.is_set(PCC::INUSE) {
        return Err(ErrorCode::NOPERM);
    }
    Ok(())
}

/// Like `check_owned`, and the output clock is gated off.
fn check_reconfigurable(word: SlotWord) -> Result<(), ErrorCode> {
    check_owned(word)?;
    if word.is_set(PCC::CGC) {
        return Err(ErrorCode::NOPERM);
    }
    Ok(())
}

pub struct Pcc<'a, IO: RegisterIo, C: ClockTree> {
    io: &'a IO,
    clocks: &'a C,
}

impl<'a, IO: RegisterIo, C: ClockTree> Pcc<'a, IO, C> {
    pub const fn new(io: &'a IO, clocks: &'a C) -> Self {
        Pcc { io, clocks }
    }

    fn read_slot(&self, entry: &PccSlot) -> SlotWord {
        SlotWord::new(self.io.read32(entry.address()))
    }

    fn write_slot(&self, entry: &PccSlot, word: SlotWord) {
        self.io.write32(entry.address(), word.get());
    }

    fn trace(&self, controller: PccController, slot: u32, word: SlotWord) {
        if CONFIG.trace_clock_ops {
            debug!(
                "PCC{} slot {}: {:#010x}",
                controller.id(),
                slot,
                word.get()
            );
        }
    }

    /// Open or close the clock gate of a slot.
    ///
    /// Only `CGC` is written. Enabling an enabled slot rewrites the same
    /// value.
    pub fn clock_enable(
        &self,
        controller: PccController,
        slot: u32,
        enable: bool,
    ) -> Result<(), ErrorCode> {
        let entry = lookup(controller, slot)?;
        let mut word = self.read_slot(entry);
        check_owned(word)?;

        word.modify(if enable {
            PCC::CGC::SET
        } else {
            PCC::CGC::CLEAR
        });
        self.write_slot(entry, word);
        self.trace(controller, slot, word);
        Ok(())
    }

    /// Whether the slot is clocked, by us or by the master that claimed it.
    pub fn clock_is_enabled(
        &self,
        controller: PccController,
        slot: u32,
    ) -> Result<bool, ErrorCode> {
        let entry = lookup(controller, slot)?;
        let word = self.read_slot(entry);
        Ok(word.is_set(PCC::INUSE) || word.is_set(PCC::CGC))
    }

    /// Route `source` to the slot. The gate must be closed.
    pub fn clock_select_source(
        &self,
        controller: PccController,
        slot: u32,
        source: CgcClk,
    ) -> Result<(), ErrorCode> {
        let entry = lookup(controller, slot)?;
        let table = controller
            .sources(entry.source)
            .ok_or(ErrorCode::NOPERM)?;

        let mut word = self.read_slot(entry);
        check_reconfigurable(word)?;

        let pcs = table
            .iter()
            .position(|&candidate| candidate == Some(source))
            .ok_or(ErrorCode::INVAL)?;

        word.modify(PCC::PCS.val(pcs as u32));
        self.write_slot(entry, word);
        self.trace(controller, slot, word);
        Ok(())
    }

    /// The CGC output currently routed to the slot.
    ///
    /// Fails with `OFF` if `PCS` selects no clock.
    pub fn clock_source(&self, controller: PccController, slot: u32) -> Result<CgcClk, ErrorCode> {
        let entry = lookup(controller, slot)?;
        let table = controller
            .sources(entry.source)
            .ok_or(ErrorCode::NOPERM)?;

        let word = self.read_slot(entry);
        if !word.is_set(PCC::PR) {
            return Err(ErrorCode::NOPERM);
        }

        table[word.read(PCC::PCS) as usize].ok_or(ErrorCode::OFF)
    }

    /// Set the slot to divide its source by `div`, or by `div / 2` when
    /// `frac` is set. The gate must be closed.
    ///
    /// `div` must be within `[1, 8]`, and `frac` requires `div > 1`. The
    /// ownership and gate checks come first, so a running clock is reported
    /// as `NOPERM` whatever the arguments.
    pub fn clock_divider_config(
        &self,
        controller: PccController,
        slot: u32,
        frac: bool,
        div: u8,
    ) -> Result<(), ErrorCode> {
        let entry = lookup(controller, slot)?;
        if !entry.has_divider {
            return Err(ErrorCode::NOPERM);
        }

        let mut word = self.read_slot(entry);
        check_reconfigurable(word)?;

        if div == 0 || div > MAX_DIVIDER || (frac && div == 1) {
            return Err(ErrorCode::INVAL);
        }

        word.modify(PCC::FRAC.val(frac as u32) + PCC::PCD.val((div - 1) as u32));
        self.write_slot(entry, word);
        self.trace(controller, slot, word);
        Ok(())
    }

    /// Output frequency of the slot in Hz.
    ///
    /// Fails with `OFF` if no source is routed. A source that is routed but
    /// stopped gives `Ok(0)`.
    pub fn clock_get_rate(&self, controller: PccController, slot: u32) -> Result<u32, ErrorCode> {
        let source = self.clock_source(controller, slot)?;
        let entry = lookup(controller, slot)?;
        let parent = self.clocks.clk_get_rate(source);

        if !entry.has_divider {
            return Ok(parent);
        }

        let word = self.read_slot(entry);
        let numerator = u64::from(word.read(PCC::FRAC)) + 1;
        let denominator = u64::from(word.read(PCC::PCD)) + 1;
        // FRAC=1 with PCD=0 doubles the parent; only firmware on another
        // core can program that.
        let rate = u64::from(parent) * numerator / denominator;
        Ok(u32::try_from(rate).unwrap_or(u32::MAX))
    }

    /// Like [`clock_get_rate`], with every failure reported as 0.
    ///
    /// [`clock_get_rate`]: Pcc::clock_get_rate
    pub fn clock_rate(&self, controller: PccController, slot: u32) -> u32 {
        self.clock_get_rate(controller, slot).unwrap_or(0)
    }

    /// Hold the peripheral in reset (`assert`) or let it run.
    pub fn reset_peripheral(
        &self,
        controller: PccController,
        slot: u32,
        assert: bool,
    ) -> Result<(), ErrorCode> {
        let entry = lookup(controller, slot)?;
        if !entry.has_reset {
            return Err(ErrorCode::NOPERM);
        }

        let mut word = self.read_slot(entry);
        if !word.is_set(PCC::PR) {
            return Err(ErrorCode::NOPERM);
        }

        word.modify(if assert {
            PCC::SWRST::Asserted
        } else {
            PCC::SWRST::Released
        });
        self.write_slot(entry, word);
        self.trace(controller, slot, word);
        Ok(())
    }
}

/// The clock gate of one PCC slot, for drivers that take a `ClockInterface`.
pub struct PeripheralClock<'a, IO: RegisterIo, C: ClockTree> {
    pcc: &'a Pcc<'a, IO, C>,
    controller: PccController,
    slot: u32,
}

impl<'a, IO: RegisterIo, C: ClockTree> PeripheralClock<'a, IO, C> {
    pub const fn new(pcc: &'a Pcc<'a, IO, C>, controller: PccController, slot: u32) -> Self {
        PeripheralClock {
            pcc,
            controller,
            slot,
        }
    }

    fn set_gate(&self, enable: bool) {
        if let Err(e) = self.pcc.clock_enable(self.controller, self.slot, enable) {
            debug!(
                "PCC{} slot {}: cannot {} clock: {:?}",
                self.controller.id(),
                self.slot,
                if enable { "enable" } else { "disable" },
                e
            );
        }
    }
}

impl<IO: RegisterIo, C: ClockTree> ClockInterface for PeripheralClock<'_, IO, C> {
    fn is_enabled(&self) -> bool {
        self.pcc
            .clock_is_enabled(self.controller, self.slot)
            .unwrap_or(false)
    }

    fn enable(&self) {
        self.set_gate(true);
    }

    fn disable(&self) {
        self.set_gate(false);
    }
}
