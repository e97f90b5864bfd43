// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Data structure for storing compile-time configuration options in the
//! kernel.
//!
//! Configuration lives in a single `const` object instead of scattered
//! `#[cfg]` attributes. The code for a disabled option is still type checked
//! on every build, and the optimizer removes it because every test is against
//! a constant. The values are set through the cargo features of this crate.

/// Compile-time configuration options.
pub struct Config {
    /// Prefix every `debug!` line with the file and line of the call site.
    ///
    /// Disabled by the `no_debug_file_line` feature to save the flash used by
    /// the location strings.
    pub debug_file_line: bool,

    /// Print a `debug!` line for every register update made by the clock
    /// drivers. Useful when a peripheral stays silent after bring-up.
    pub trace_clock_ops: bool,
}

/// A unique instance of `Config` where compile-time configuration options are
/// defined.
pub const CONFIG: Config = Config {
    debug_file_line: !cfg!(feature = "no_debug_file_line"),
    trace_clock_ops: cfg!(feature = "trace_clock_ops"),
};
