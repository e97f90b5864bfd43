// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Clock Generation Controller (CGC) outputs.
//!
//! The CGC blocks own the oscillators (SOSC, FROSC, LPOSC) and the PLL3/PLL4
//! trees. The PCC only routes and divides their outputs, so it needs two
//! things from here: names for the outputs ([`CgcClk`]) and their current
//! frequency ([`ClockTree`]).

use core::cell::Cell;

/// A CGC output that can be routed to a PCC slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum CgcClk {
    /// Low power oscillator, 1MHz
    Lposc,
    SoscDiv1,
    SoscDiv2,
    FroscDiv1,
    FroscDiv2,
    /// Real-time domain bus clock
    XbarBusClk,
    /// Audio/video domain bus clock
    LpavBusClk,
    Pll3VcoDiv,
    Pll3Pfd0Div1,
    Pll3Pfd0Div2,
    Pll3Pfd1Div1,
    Pll3Pfd1Div2,
    Pll3Pfd2Div1,
    Pll3Pfd2Div2,
    Pll3Pfd3Div1,
    Pll3Pfd3Div2,
    Pll4VcoDiv,
    Pll4Pfd0Div1,
    Pll4Pfd0Div2,
    Pll4Pfd1Div1,
    Pll4Pfd1Div2,
    Pll4Pfd2Div1,
    Pll4Pfd2Div2,
    Pll4Pfd3Div1,
    Pll4Pfd3Div2,
}

const NUM_CGC_CLKS: usize = CgcClk::Pll4Pfd3Div2 as usize + 1;

/// Source of truth for CGC output frequencies.
pub trait ClockTree {
    /// Current frequency of `clk` in Hz, 0 if it is unknown or stopped.
    fn clk_get_rate(&self, clk: CgcClk) -> u32;
}

/// A [`ClockTree`] backed by a table of rates the board fills in.
///
/// Boards that program the PLLs themselves (or inherit them from an earlier
/// boot stage) record the resulting frequencies with [`set_rate`]. Outputs
/// that were never recorded report 0.
///
/// [`set_rate`]: StaticClockTree::set_rate
pub struct StaticClockTree {
    rates: [Cell<u32>; NUM_CGC_CLKS],
}

impl StaticClockTree {
    pub const fn new() -> StaticClockTree {
        StaticClockTree {
            rates: [const { Cell::new(0) }; NUM_CGC_CLKS],
        }
    }

    pub fn set_rate(&self, clk: CgcClk, hz: u32) {
        self.rates[clk as usize].set(hz);
    }
}

impl ClockTree for StaticClockTree {
    fn clk_get_rate(&self, clk: CgcClk) -> u32 {
        self.rates[clk as usize].get()
    }
}

#[cfg(test)]
mod tests {
    use super::{CgcClk, ClockTree, StaticClockTree};

    #[test]
    fn unrecorded_outputs_are_stopped() {
        let tree = StaticClockTree::new();
        tree.set_rate(CgcClk::SoscDiv2, 24_000_000);
        tree.set_rate(CgcClk::Pll4Pfd3Div2, 392_000_000);

        assert_eq!(tree.clk_get_rate(CgcClk::SoscDiv2), 24_000_000);
        assert_eq!(tree.clk_get_rate(CgcClk::Pll4Pfd3Div2), 392_000_000);
        assert_eq!(tree.clk_get_rate(CgcClk::Lposc), 0);
        assert_eq!(tree.clk_get_rate(CgcClk::SoscDiv1), 0);
    }
}
