// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;

use thiserror::Error;

/// KDF error
///
/// Every variant is a precondition failure detected before the PRF runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KdfError {
    /// Hash name does not map to a supported [`HashSpec`](crate::HashSpec)
    #[error("unsupported hash function: {name:?}")]
    UnsupportedHash {
        /// The name that failed to resolve
        name: String,
    },

    /// Requested output length exceeds the algorithm maximum
    #[error("requested output length {requested} exceeds maximum ({max})")]
    KeyTooLong {
        /// Requested output length in bytes
        requested: usize,
        /// Largest permitted output length in bytes
        max: u64,
    },

    /// Output buffer handed to the PRF is not exactly one digest long
    #[error("PRF output buffer is {actual} bytes, expected {expected}")]
    OutputBufferLength {
        /// Digest length of the hash in use
        expected: usize,
        /// Length of the buffer that was passed
        actual: usize,
    },

    /// PBKDF2 iteration count must be at least 1
    #[error("iteration count must be at least 1")]
    InvalidIterationCount,
}
