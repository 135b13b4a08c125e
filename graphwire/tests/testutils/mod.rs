//! Test utilities for graphwire integration tests
//!
//! - replies: builders for compact reply trees
//! - scripted_executor: in-memory CommandExecutor answering schema procedures
//!   from fixed name lists and everything else from a queue of replies

#![allow(dead_code)]

pub mod replies;
pub mod scripted_executor;

/// Route `log` output through the test harness; safe to call from every test
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
