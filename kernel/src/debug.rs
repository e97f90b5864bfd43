// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Support for in-kernel debugging.
//!
//! The board registers its console once with [`set_debug_writer`]; after that
//! any crate can print with `debug!`:
//!
//! ```rust,ignore
//! debug!("PCC{} slot {} running at {}Hz", 4, slot, rate);
//! ```
//!
//! Each message ends up on one line, prefixed with `TOCK_DEBUG:` and, unless
//! the kernel is built with `no_debug_file_line`, with the file and line of
//! the call site. Output is written synchronously. Before a writer is
//! registered `debug!` discards its arguments.

use core::cell::Cell;
use core::fmt::{self, Write};

use crate::config;

/// Synchronous byte sink for debug output, usually a polled UART.
pub trait IoWrite {
    /// Writes a prefix of `buf` and returns how many bytes were consumed.
    fn write(&self, buf: &[u8]) -> usize;
}

struct DebugWriterCell(Cell<Option<&'static dyn IoWrite>>);

// Safety: the kernel has a single thread of control and debug output is never
// produced from an interrupt handler.
unsafe impl Sync for DebugWriterCell {}

static DEBUG_WRITER: DebugWriterCell = DebugWriterCell(Cell::new(None));

/// Route `debug!` output to `writer`.
///
/// # Safety
///
/// Must be called from the kernel thread, not from an interrupt handler.
pub unsafe fn set_debug_writer(writer: &'static dyn IoWrite) {
    DEBUG_WRITER.0.set(Some(writer));
}

/// Adapts an [`IoWrite`] sink to `core::fmt::Write`.
struct DebugWriterWrapper<'a> {
    dw: &'a dyn IoWrite,
}

impl Write for DebugWriterWrapper<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut bytes = s.as_bytes();
        while !bytes.is_empty() {
            let written = self.dw.write(bytes);
            if written == 0 {
                // The sink is wedged; drop the rest of the line.
                return Err(fmt::Error);
            }
            bytes = &bytes[written.min(bytes.len())..];
        }
        Ok(())
    }
}

fn write_debug_line(
    writer: &dyn IoWrite,
    args: fmt::Arguments,
    file_line: &(&'static str, u32),
) -> fmt::Result {
    let mut w = DebugWriterWrapper { dw: writer };
    w.write_str("TOCK_DEBUG: ")?;
    if config::CONFIG.debug_file_line {
        let (file, line) = *file_line;
        write!(w, "{}:{}: ", file, line)?;
    }
    w.write_fmt(args)?;
    w.write_str("\r\n")
}

/// Entry point of the `debug!` macro. Call the macro instead.
pub fn debug_fmt(args: fmt::Arguments, file_line: &(&'static str, u32)) {
    if let Some(writer) = DEBUG_WRITER.0.get() {
        let _ = write_debug_line(writer, args, file_line);
    }
}

/// In-kernel `println()` debugging.
#[macro_export]
macro_rules! debug {
    () => ({
        // Allow an empty debug!() to print the location when hit
        $crate::debug!("")
    });
    ($msg:expr $(,)?) => ({
        $crate::debug::debug_fmt(format_args!("{}", $msg), {
            static _FILE_LINE: (&'static str, u32) = (file!(), line!());
            &_FILE_LINE
        })
    });
    ($fmt:expr, $($arg:tt)+) => ({
        $crate::debug::debug_fmt(format_args!($fmt, $($arg)+), {
            static _FILE_LINE: (&'static str, u32) = (file!(), line!());
            &_FILE_LINE
        })
    });
}

#[cfg(test)]
mod tests {
    use super::{write_debug_line, IoWrite};
    use core::cell::RefCell;
    use std::vec::Vec;

    /// Accepts at most `chunk` bytes per call, like a small UART FIFO.
    struct Fifo {
        out: RefCell<Vec<u8>>,
        chunk: usize,
    }

    impl IoWrite for Fifo {
        fn write(&self, buf: &[u8]) -> usize {
            let n = buf.len().min(self.chunk);
            self.out.borrow_mut().extend_from_slice(&buf[..n]);
            n
        }
    }

    static LOCATION: (&str, u32) = ("chips/imx8ulp/src/pcc.rs", 42);

    #[test]
    fn line_framing() {
        let fifo = Fifo {
            out: RefCell::new(Vec::new()),
            chunk: 3,
        };
        write_debug_line(&fifo, format_args!("rate {}", 24_000_000), &LOCATION).unwrap();

        let out = fifo.out.into_inner();
        let line = core::str::from_utf8(&out).unwrap();
        assert!(line.starts_with("TOCK_DEBUG: "));
        assert!(line.ends_with("rate 24000000\r\n"));
        if crate::config::CONFIG.debug_file_line {
            assert!(line.contains("chips/imx8ulp/src/pcc.rs:42: "));
        }
    }

    #[test]
    fn stalled_writer_gives_up() {
        let fifo = Fifo {
            out: RefCell::new(Vec::new()),
            chunk: 0,
        };
        assert!(write_debug_line(&fifo, format_args!("lost"), &LOCATION).is_err());
        assert!(fifo.out.borrow().is_empty());
    }
}
