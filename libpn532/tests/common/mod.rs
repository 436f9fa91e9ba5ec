// Shared helpers for integration tests. Each aggregator includes this
// module once per test file, so not every item is used everywhere.
#![allow(dead_code)]

pub mod fixtures;
