//! The formatted-output engines `snprintf` can forward to.
//!
//! Exactly one engine is selected per build, by `build.rs`, which sets the
//! `snprintf_engine` cfg. `Selected` names it.

use core::ffi::{c_char, c_int, VaList};

#[cfg(feature = "engine-printf-compat")]
pub(crate) mod printf_compat;
#[cfg(any(snprintf_engine = "ucrt", snprintf_host_vsnprintf))]
pub mod ucrt;
#[cfg(snprintf_host_vsnprintf)]
pub(crate) mod vsnprintf;

/// A bounded formatted write: the `vsnprintf` contract.
pub(crate) trait BoundedFormat {
    /// Formats `format` with `args` into `buf`, writing at most `len` bytes
    /// including the terminator, and returns the untruncated length.
    ///
    /// # Safety
    ///
    /// `buf` must have `len` writable bytes (it may be null if `len` is 0),
    /// `format` must be a valid C string, and `args` must match it.
    unsafe fn vsnprintf(
        buf: *mut c_char,
        len: usize,
        format: *const c_char,
        args: VaList,
    ) -> c_int;
}

cfg_if::cfg_if! {
    if #[cfg(snprintf_engine = "ucrt")] {
        pub(crate) type Selected = ucrt::Ucrt;
    } else if #[cfg(snprintf_engine = "ucrt_standin")] {
        pub(crate) type Selected = ucrt::StandIn;
    } else if #[cfg(snprintf_engine = "vsnprintf")] {
        pub(crate) type Selected = vsnprintf::Vsnprintf;
    } else if #[cfg(snprintf_engine = "printf_compat")] {
        pub(crate) type Selected = printf_compat::PrintfCompat;
    } else {
        compile_error!("no `snprintf_engine` cfg; this crate must be built through its build script");
    }
}
