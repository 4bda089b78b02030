//! Cross-module scenario tests.
//!
//! Unit tests that exercise a single module sit next to it; the suites here
//! drive the reducer, evaluator, and machine together over whole programs.

mod reduce_tests;
