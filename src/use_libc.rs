//! Utilities to check against C signatures.

/// Type-checks `$e`, a call to the `libc` crate's declaration of the
/// function being defined, against the surrounding function's signature.
/// The call is never made.
macro_rules! libc {
    ($e:expr) => {
        #[allow(unreachable_code)]
        if false {
            return $e;
        }
    };
}
