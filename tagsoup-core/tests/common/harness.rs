//! Test harness for running fixture cases whole and chunked

use crate::common::{Gen, TestCase};
use tagsoup_core::{Event, Tokenizer};

/// Result of running a test
#[derive(Debug)]
pub struct TestResult {
    pub passed: bool,
    pub chunks: Vec<String>,
    pub expected: Vec<Event>,
    pub actual: Vec<Event>,
    pub seed: u64,
}

/// Feed the whole input, then close
pub fn collect_events(input: &str) -> Vec<Event> {
    collect_chunked(&[input])
}

/// Feed each chunk in turn, then close
pub fn collect_chunked(chunks: &[&str]) -> Vec<Event> {
    let mut tokenizer = Tokenizer::new(Vec::new());
    for chunk in chunks {
        tokenizer.feed(chunk).unwrap();
    }
    tokenizer.close().unwrap();
    tokenizer.into_handler()
}

fn expected_events(case: &TestCase) -> Vec<Event> {
    case.events.iter().map(|e| e.to_event()).collect()
}

/// Run a single test case (canonical, no variations)
pub fn run_test(case: &TestCase) -> TestResult {
    let actual = collect_events(&case.html);
    let expected = expected_events(case);

    TestResult {
        passed: actual == expected,
        chunks: vec![case.html.clone()],
        expected,
        actual,
        seed: 0,
    }
}

/// Run a test case with the input split into random chunks.
///
/// Chunking must not change the event sequence, so this is an exact match.
pub fn run_with_variations(case: &TestCase, gen: &mut Gen) -> TestResult {
    let chunks = gen.chunks(&case.html);
    let actual = collect_chunked(&chunks);
    let expected = expected_events(case);

    TestResult {
        passed: actual == expected,
        chunks: chunks.iter().map(|c| c.to_string()).collect(),
        expected,
        actual,
        seed: gen.seed,
    }
}

impl TestResult {
    /// Print detailed failure info
    pub fn print_failure(&self, case_id: &str) {
        eprintln!("\n=== FAILED: {} ===", case_id);
        eprintln!("Seed: {} (set TAGSOUP_TEST_SEED={} to reproduce)", self.seed, self.seed);
        eprintln!("\nChunks:");
        for (i, c) in self.chunks.iter().enumerate() {
            eprintln!("  {}: {:?}", i, c);
        }
        eprintln!("\nExpected events:");
        for (i, e) in self.expected.iter().enumerate() {
            eprintln!("  {}: {}", i, e);
        }
        eprintln!("\nActual events:");
        for (i, e) in self.actual.iter().enumerate() {
            eprintln!("  {}: {}", i, e);
        }
    }
}
