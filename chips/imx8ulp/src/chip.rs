// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Chip-level peripheral instances for the i.MX8ULP.

use kernel::platform::mmio::Mmio;

use crate::cgc::{CgcClk, StaticClockTree};
use crate::pcc::Pcc;

/// The low power oscillator runs at a fixed frequency on every part.
pub const LPOSC_HZ: u32 = 1_000_000;

pub struct Imx8ulpDefaultPeripherals {
    pub mmio: Mmio,
    pub clock_tree: StaticClockTree,
}

impl Imx8ulpDefaultPeripherals {
    /// # Safety
    ///
    /// Must be created once. The returned instance takes ownership of the PCC
    /// register blocks.
    pub unsafe fn new() -> Self {
        let clock_tree = StaticClockTree::new();
        clock_tree.set_rate(CgcClk::Lposc, LPOSC_HZ);
        Self {
            mmio: Mmio::new(),
            clock_tree,
        }
    }

    /// PCC driver over the memory-mapped PCC3, PCC4 and PCC5 blocks.
    pub fn pcc(&self) -> Pcc<'_, Mmio, StaticClockTree> {
        Pcc::new(&self.mmio, &self.clock_tree)
    }
}

#[cfg(test)]
mod tests {
    use super::{Imx8ulpDefaultPeripherals, LPOSC_HZ};
    use crate::cgc::{CgcClk, ClockTree};

    #[test]
    fn lposc_is_known_at_reset() {
        let peripherals = unsafe { Imx8ulpDefaultPeripherals::new() };
        assert_eq!(peripherals.clock_tree.clk_get_rate(CgcClk::Lposc), LPOSC_HZ);
        assert_eq!(peripherals.clock_tree.clk_get_rate(CgcClk::SoscDiv1), 0);
    }
}
