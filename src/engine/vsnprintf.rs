use super::BoundedFormat;
use core::ffi::{c_char, c_int, VaList};

extern "C" {
    // The `libc` crate doesn't declare the `va_list` functions.
    #[link_name = "vsnprintf"]
    fn host_vsnprintf(
        buf: *mut c_char,
        len: usize,
        format: *const c_char,
        args: VaList,
    ) -> c_int;
}

/// The host C runtime's own `vsnprintf`, which already has the right
/// contract.
pub(crate) struct Vsnprintf;

impl BoundedFormat for Vsnprintf {
    #[inline]
    unsafe fn vsnprintf(
        buf: *mut c_char,
        len: usize,
        format: *const c_char,
        args: VaList,
    ) -> c_int {
        host_vsnprintf(buf, len, format, args)
    }
}
