// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Word access to memory-mapped device registers.
//!
//! Drivers that address their registers by computed offset (a table of slots
//! rather than a fixed `register_structs!` layout) take a [`RegisterIo`]
//! instead of dereferencing raw addresses. On hardware this is [`Mmio`]; unit
//! tests hand the driver an in-memory register file.

use crate::utilities::registers::interfaces::{Readable, Writeable};
use crate::utilities::registers::ReadWrite;
use crate::utilities::StaticRef;

/// 32-bit register access by physical address.
///
/// Accesses are performed in program order. Implementations must not cache,
/// merge or reorder them.
pub trait RegisterIo {
    fn read32(&self, address: usize) -> u32;
    fn write32(&self, address: usize, value: u32);
}

/// Volatile access to the physical address space.
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// # Safety
    ///
    /// Every address later passed to `read32` or `write32` must be a mapped,
    /// word-aligned device register, and the caller must be the only
    /// software owner of the registers it touches.
    pub const unsafe fn new() -> Mmio {
        Mmio { _private: () }
    }

    fn register(&self, address: usize) -> StaticRef<ReadWrite<u32>> {
        // Safety: covered by the contract of `Mmio::new`.
        unsafe { StaticRef::new(address as *const ReadWrite<u32>) }
    }
}

impl RegisterIo for Mmio {
    fn read32(&self, address: usize) -> u32 {
        self.register(address).get()
    }

    fn write32(&self, address: usize, value: u32) {
        self.register(address).set(value);
    }
}

#[cfg(test)]
mod tests {
    use super::{Mmio, RegisterIo};

    #[test]
    fn volatile_word_access() {
        let mut backing: [u32; 2] = [0xdead_beef, 0];
        let base = backing.as_mut_ptr() as usize;
        let mmio = unsafe { Mmio::new() };

        assert_eq!(mmio.read32(base), 0xdead_beef);
        mmio.write32(base + 4, 0x8000_0003);
        assert_eq!(mmio.read32(base + 4), 0x8000_0003);
        assert_eq!(mmio.read32(base), 0xdead_beef);
    }
}
