//! The Universal C Runtime's internal formatted-output entry point.
//!
//! UCRT has no exported `snprintf`; its headers define `snprintf` inline over
//! `__stdio_common_vsprintf`, an options-driven function that also implements
//! `sprintf`, `_snprintf`, and friends. Code that isn't compiled against
//! those headers has to make the same call itself.

use super::BoundedFormat;
use crate::STANDARD_SNPRINTF_BEHAVIOR;
use core::ffi::{c_char, c_int, c_void, VaList};
use core::ptr::null_mut;

#[cfg(snprintf_engine = "ucrt")]
mod sys {
    use core::ffi::{c_char, c_int, c_void, VaList};

    extern "C" {
        pub(super) fn __stdio_common_vsprintf(
            options: u64,
            buf: *mut c_char,
            len: usize,
            format: *const c_char,
            locale: *mut c_void,
            args: VaList,
        ) -> c_int;
    }
}

/// `__stdio_common_vsprintf` from the UCRT, with the current locale.
#[cfg(snprintf_engine = "ucrt")]
pub(crate) struct Ucrt;

#[cfg(snprintf_engine = "ucrt")]
impl BoundedFormat for Ucrt {
    #[inline]
    unsafe fn vsnprintf(
        buf: *mut c_char,
        len: usize,
        format: *const c_char,
        args: VaList,
    ) -> c_int {
        sys::__stdio_common_vsprintf(
            STANDARD_SNPRINTF_BEHAVIOR,
            buf,
            len,
            format,
            null_mut(),
            args,
        )
    }
}

/// The same call as `Ucrt`, made to the local stand-in below.
#[cfg(snprintf_host_vsnprintf)]
pub(crate) struct StandIn;

#[cfg(snprintf_host_vsnprintf)]
impl BoundedFormat for StandIn {
    #[inline]
    unsafe fn vsnprintf(
        buf: *mut c_char,
        len: usize,
        format: *const c_char,
        args: VaList,
    ) -> c_int {
        __stdio_common_vsprintf(
            STANDARD_SNPRINTF_BEHAVIOR,
            buf,
            len,
            format,
            null_mut(),
            args,
        )
    }
}

/// A stand-in for the UCRT's `__stdio_common_vsprintf`, for runtimes that
/// don't have it (msvcrt-based MinGW) but link objects that call it.
///
/// Only standard `snprintf` behavior is provided: `options` other than
/// [`STANDARD_SNPRINTF_BEHAVIOR`] are ignored, as is `locale`. A null
/// `format`, or a null `buf` with a nonzero `len`, returns -1 with `errno`
/// set to `EINVAL` where the UCRT would call its invalid-parameter handler
/// (which terminates the process by default).
///
/// Exported under its own name only when it is the selected engine.
///
/// # Safety
///
/// Same as `vsnprintf`.
#[cfg(snprintf_host_vsnprintf)]
#[cfg_attr(snprintf_engine = "ucrt_standin", no_mangle)]
#[cfg_attr(not(feature = "log"), allow(unused_variables))]
pub unsafe extern "C" fn __stdio_common_vsprintf(
    options: u64,
    buf: *mut c_char,
    len: usize,
    format: *const c_char,
    _locale: *mut c_void,
    args: VaList,
) -> c_int {
    if format.is_null() || (buf.is_null() && len != 0) {
        set_crt_errno(libc::EINVAL);
        return -1;
    }

    #[cfg(feature = "log")]
    if options & !STANDARD_SNPRINTF_BEHAVIOR != 0 {
        log::debug!(
            target: "snprintf_shim::ucrt",
            "ignoring `__stdio_common_vsprintf` options {:#x}",
            options & !STANDARD_SNPRINTF_BEHAVIOR
        );
    }

    super::vsnprintf::Vsnprintf::vsnprintf(buf, len, format, args)
}

/// The `errno` crate goes through `SetLastError` on Windows, but C callers of
/// this function read the CRT's `errno`.
#[cfg(snprintf_host_vsnprintf)]
unsafe fn set_crt_errno(code: c_int) {
    #[cfg(windows)]
    {
        extern "C" {
            fn _errno() -> *mut c_int;
        }
        *_errno() = code;
    }

    #[cfg(not(windows))]
    errno::set_errno(errno::Errno(code));
}
