#![cfg(test)]

//! Test logging for the library's unit tests.
//!
//! Delegates to the shared test-support crate so unit and integration
//! tests read `TEST_LOG` / `RUST_LOG` the same way.

pub fn init() {
    bot_test_support::logging::init();
}
