#![allow(dead_code)]

// tests/common/mod.rs

// Logging is auto-installed for every test binary that includes `mod common;`
#[ctor::ctor]
fn init_logging() {
    bot_test_support::logging::init();
}
