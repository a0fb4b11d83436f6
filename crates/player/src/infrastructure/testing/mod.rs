//! Test helpers shared by unit tests (enabled with `test` or the `testing` feature)

pub mod fixtures;
