// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Peripheral implementations for the NXP i.MX8ULP.
//!
//! Only the clocking path needed during bring-up is covered: the CGC outputs
//! that feed peripherals and the three Peripheral Clock Controllers (PCC3,
//! PCC4 and PCC5).

#![crate_name = "imx8ulp"]
#![crate_type = "rlib"]
#![no_std]

#[cfg(test)]
extern crate std;

pub mod cgc;
pub mod chip;
pub mod pcc;
pub mod pcc_slots;
