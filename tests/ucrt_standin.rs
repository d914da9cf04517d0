//! The `__stdio_common_vsprintf` stand-in, on targets that have a `vsnprintf`
//! for it to forward to.

#![feature(c_variadic)]
#![cfg(snprintf_host_vsnprintf)]

use libc::{c_char, c_int};
use similar_asserts::assert_eq;
use snprintf_shim::{snprintf, ucrt, STANDARD_SNPRINTF_BEHAVIOR};
use std::ptr::{null, null_mut};

/// `_CRT_INTERNAL_PRINTF_LEGACY_VSPRINTF_NULL_TERMINATION`
const LEGACY_VSPRINTF_NULL_TERMINATION: u64 = 0x0001;

/// The C runtime's `errno`, which the stand-in sets.
#[cfg(windows)]
fn crt_errno() -> c_int {
    extern "C" {
        fn _errno() -> *mut c_int;
    }
    unsafe { *_errno() }
}

#[cfg(not(windows))]
fn crt_errno() -> c_int {
    errno::errno().0
}

fn clear_crt_errno() {
    #[cfg(windows)]
    {
        extern "C" {
            fn _errno() -> *mut c_int;
        }
        unsafe { *_errno() = 0 }
    }

    #[cfg(not(windows))]
    errno::set_errno(errno::Errno(0));
}

/// What a UCRT header's inline `snprintf` looks like.
unsafe extern "C" fn ucrt_snprintf(
    options: u64,
    buf: *mut c_char,
    len: usize,
    fmt: *const c_char,
    args: ...
) -> c_int {
    ucrt::__stdio_common_vsprintf(options, buf, len, fmt, null_mut(), args)
}

#[test]
fn test_matches_snprintf() {
    for cap in [0, 1, 4, 9, 32] {
        let mut ours = vec![0xa5_u8; cap];
        let mut theirs = vec![0xa5_u8; cap];
        let ret_ours = unsafe {
            ucrt_snprintf(
                STANDARD_SNPRINTF_BEHAVIOR,
                ours.as_mut_ptr().cast(),
                cap,
                c"%s=%04d".as_ptr(),
                c"answer".as_ptr(),
                42 as c_int,
            )
        };
        let ret_theirs = unsafe {
            snprintf(
                theirs.as_mut_ptr().cast(),
                cap,
                c"%s=%04d".as_ptr(),
                c"answer".as_ptr(),
                42 as c_int,
            )
        };
        assert_eq!(ret_ours, 11, "capacity {}", cap);
        assert_eq!(ret_ours, ret_theirs, "capacity {}", cap);
        assert_eq!(ours, theirs, "capacity {}", cap);
    }
}

#[test]
fn test_truncates_like_snprintf() {
    let mut buf = [0xa5_u8; 3];
    let ret = unsafe {
        ucrt_snprintf(
            STANDARD_SNPRINTF_BEHAVIOR,
            buf.as_mut_ptr().cast(),
            buf.len(),
            c"%05d".as_ptr(),
            7 as c_int,
        )
    };
    assert_eq!(ret, 5);
    assert_eq!(&buf, b"00\0");
}

#[test]
fn test_null_format() {
    let mut buf = [0xa5_u8; 8];
    clear_crt_errno();
    let ret = unsafe {
        ucrt_snprintf(
            STANDARD_SNPRINTF_BEHAVIOR,
            buf.as_mut_ptr().cast(),
            buf.len(),
            null(),
        )
    };
    assert_eq!(ret, -1);
    assert_eq!(crt_errno(), libc::EINVAL);
    assert_eq!(buf, [0xa5_u8; 8]);
}

#[test]
fn test_null_buffer() {
    clear_crt_errno();
    let ret = unsafe {
        ucrt_snprintf(
            STANDARD_SNPRINTF_BEHAVIOR,
            null_mut(),
            8,
            c"%d".as_ptr(),
            1 as c_int,
        )
    };
    assert_eq!(ret, -1);
    assert_eq!(crt_errno(), libc::EINVAL);

    // Measuring with a null buffer and no capacity is fine.
    let ret = unsafe {
        ucrt_snprintf(
            STANDARD_SNPRINTF_BEHAVIOR,
            null_mut(),
            0,
            c"%d".as_ptr(),
            12345 as c_int,
        )
    };
    assert_eq!(ret, 5);
}

#[test]
fn test_other_options_ignored() {
    let mut buf = [0xa5_u8; 4];
    let ret = unsafe {
        ucrt_snprintf(
            STANDARD_SNPRINTF_BEHAVIOR | LEGACY_VSPRINTF_NULL_TERMINATION,
            buf.as_mut_ptr().cast(),
            buf.len(),
            c"%s".as_ptr(),
            c"overflow".as_ptr(),
        )
    };
    assert_eq!(ret, 8);
    assert_eq!(&buf, b"ove\0");
}
