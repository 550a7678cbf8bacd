//! Crate-level invariant tests.
