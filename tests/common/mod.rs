#![allow(dead_code)]

pub use pacetrack_test_utils::{assert_close, init_tracing};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
