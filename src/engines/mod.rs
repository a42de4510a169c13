//! Engine implementations.
//!
//! Backends implement the [`crate::RecognitionEngine`] trait. The crate ships
//! a deterministic scripted engine for tests and host development; native
//! backends live behind the same trait in downstream crates.

pub mod mock;
