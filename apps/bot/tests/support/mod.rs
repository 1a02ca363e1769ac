#![allow(dead_code)]

pub mod executors;
pub mod payloads;

pub use app_builder::{create_test_app, TestBot};
pub use executors::RecordingExecutor;
pub use payloads::{command, component, ping, signed_post};
