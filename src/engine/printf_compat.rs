//! The pure-Rust engine, for targets without a C runtime.
//!
//! This uses the `printf_compat` crate, which [has differences with glibc].
//! Unlike the other engines, its output is not C's:
//!
//!  - `%g`, `%G`, and `%a` format like `%f`.
//!  - A format string or `%s` argument that isn't UTF-8 fails the whole call
//!    with -1.
//!  - Precision and width on `%s` count `char`s, not bytes.
//!  - `%c` of a byte of 0x80 or more writes its two-byte UTF-8 encoding.
//!  - `%n` fails the call.
//!
//! [has differences with glibc]: https://docs.rs/printf-compat/0.1.1/printf_compat/output/fn.fmt_write.html#differences

use super::BoundedFormat;
use core::ffi::{c_char, c_int, VaList};
use core::{fmt, slice};
use printf_compat::{format, output};

pub(crate) struct PrintfCompat;

impl BoundedFormat for PrintfCompat {
    unsafe fn vsnprintf(
        buf: *mut c_char,
        len: usize,
        fmt: *const c_char,
        args: VaList,
    ) -> c_int {
        // Leave room for the terminator.
        let room: &mut [u8] = match len {
            0 => &mut [],
            _ => slice::from_raw_parts_mut(buf.cast::<u8>(), len - 1),
        };

        let mut sink = Truncating::new(room);
        let num_bytes = format(fmt, args, output::fmt_write(&mut sink));
        let filled = sink.filled();

        if len != 0 {
            *buf.add(filled) = 0;
        }

        num_bytes
    }
}

/// A `fmt::Write` that keeps as much as fits and drops the rest.
///
/// `printf_compat` counts every byte it offers, so the engine's return value
/// stays the untruncated length.
struct Truncating<'a> {
    buf: &'a mut [u8],
    filled: usize,
}

impl<'a> Truncating<'a> {
    fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, filled: 0 }
    }

    fn filled(&self) -> usize {
        self.filled
    }
}

impl fmt::Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let n = s.len().min(self.buf.len() - self.filled);
        self.buf[self.filled..][..n].copy_from_slice(&s.as_bytes()[..n]);
        self.filled += n;
        Ok(())
    }
}
