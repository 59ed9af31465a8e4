//! Test infrastructure for the tag soup tokenizer
//!
//! Provides fixture loading, stochastic chunk splitting, and run helpers.

#![allow(dead_code)]

mod generators;
mod harness;
mod loader;

pub use generators::Gen;
pub use harness::{collect_chunked, collect_events, run_test, run_with_variations};
pub use loader::{load_fixtures_by_name, ExpectedEvent, TestCase};
