//! Owned byte storage for opaque payloads crossing the engine boundary.

use std::ops::{Deref, DerefMut};

/// Exclusively-owned, fixed-size block of bytes.
///
/// Used uniformly for encoded image data and model data: both are opaque
/// payloads from the session's perspective, validated only by the downstream
/// library that consumes them. The engine copies the contents into its own
/// representation during a load call, so a buffer may be dropped as soon as
/// that call returns.
pub struct RawBuffer {
    bytes: Box<[u8]>,
}

impl RawBuffer {
    /// Allocate a zero-filled buffer of `len` bytes.
    pub fn new(len: usize) -> Self {
        Self {
            bytes: vec![0u8; len].into_boxed_slice(),
        }
    }

    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self {
            bytes: bytes.into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl Deref for RawBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl DerefMut for RawBuffer {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl From<Vec<u8>> for RawBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_vec(bytes)
    }
}
