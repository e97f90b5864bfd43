// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Core kernel crate shared by all chip crates.
//!
//! Chip crates rely on this crate for the vocabulary that crosses crate
//! boundaries during bring-up:
//!
//! - [`ErrorCode`], the error type of every fallible hardware operation.
//! - The `debug!` macro for console output.
//! - [`config::CONFIG`], compile-time options selected through cargo features.
//! - [`platform::mmio::RegisterIo`], the register access capability drivers
//!   are written against, and [`platform::chip::ClockInterface`].
//! - The re-exported Tock register interface in [`utilities::registers`].

#![no_std]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod debug;
pub mod errorcode;
pub mod platform;
pub mod utilities;

pub use crate::errorcode::ErrorCode;
