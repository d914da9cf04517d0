#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]
#![feature(c_variadic)]

// Hosted targets link `std` for its panic handler.
#[cfg(all(not(test), any(unix, windows, target_os = "wasi")))]
extern crate std;

#[macro_use]
mod use_libc;

mod engine;

#[cfg(any(snprintf_engine = "ucrt", snprintf_host_vsnprintf))]
pub use engine::ucrt;

use core::ffi::{c_char, c_int};
use engine::{BoundedFormat, Selected};

/// The engine `snprintf` forwards to in this build: one of `"vsnprintf"`,
/// `"ucrt"`, `"ucrt_standin"`, or `"printf_compat"`.
pub const ENGINE: &str = env!("SNPRINTF_SHIM_ENGINE");

/// `_CRT_INTERNAL_PRINTF_STANDARD_SNPRINTF_BEHAVIOR`: the UCRT option that
/// makes `__stdio_common_vsprintf` truncate, terminate, and return the
/// untruncated length, as C99 `snprintf` does.
pub const STANDARD_SNPRINTF_BEHAVIOR: u64 = 0x0002;

/// C99 `snprintf`.
///
/// Writes at most `len` bytes of the formatted output, including a NUL
/// terminator, to `ptr`, and returns the length the output would have had
/// with no limit. A return value of `len` or more means the output was
/// truncated. `ptr` may be null when `len` is 0.
///
/// # Safety
///
/// `ptr` must have `len` writable bytes, `fmt` must be a valid C string, and
/// the arguments must match the conversions in `fmt`.
#[no_mangle]
pub unsafe extern "C" fn snprintf(
    ptr: *mut c_char,
    len: usize,
    fmt: *const c_char,
    args: ...
) -> c_int {
    #[cfg(unix)]
    libc!(libc::snprintf(ptr, len, fmt));

    // The one conversion of the captured list; it is not read again here.
    let va_list = args;
    Selected::vsnprintf(ptr, len, fmt, va_list)
}

#[cfg(all(
    feature = "panic-handler-trap",
    not(test),
    not(any(unix, windows, target_os = "wasi"))
))]
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo<'_>) -> ! {
    loop {}
}
