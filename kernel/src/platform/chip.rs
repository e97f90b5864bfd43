// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Interfaces for individual MCUs.

/// Generic operations that clock-like things are expected to support.
///
/// `enable` and `disable` have no error channel. Implementations whose
/// hardware can refuse the request report the failure through `debug!` and
/// leave the clock as it was.
pub trait ClockInterface {
    fn is_enabled(&self) -> bool;
    fn enable(&self);
    fn disable(&self);
}
