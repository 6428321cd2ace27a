//! C ABI entry point linked into generated programs.
//!
//! A `sleep <expr>;` statement lowers to `call void @sleep_ns(i64 %expr)`.
//! Build the crate as a static library and pass it to the linker alongside
//! the emitted object files.

use crate::core::blocking::sleep_for_nanoseconds;
use std::panic;

/// `void sleep_ns(int64_t nanoseconds);`
#[no_mangle]
pub extern "C" fn sleep_ns(nanoseconds: i64) {
    // unwinding into foreign frames is undefined
    if panic::catch_unwind(|| sleep_for_nanoseconds(nanoseconds)).is_err() {
        tracing::error!("sleep_ns({}) panicked", nanoseconds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_callable_through_function_pointer() {
        let f: extern "C" fn(i64) = sleep_ns;
        let start = Instant::now();
        f(10_000_000);
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
