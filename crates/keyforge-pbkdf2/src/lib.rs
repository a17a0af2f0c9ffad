// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PBKDF2 implementation per RFC 8018 Section 5.2
//!
//! Iterated HMAC with a selectable hash function. The iteration count is the
//! cost parameter, a `usize` that must be at least 1, and is always run in full.
//!
//! ```
//! use keyforge_pbkdf2::{HashSpec, derive};
//!
//! let key = derive(b"password", b"salt", 4096, 20, HashSpec::Sha1)
//!     .expect("valid parameters");
//!
//! assert_eq!(key.len(), 20);
//! ```
//!
//! References:
//! - RFC 8018: PKCS #5: Password-Based Cryptography Specification Version 2.1
//!   <https://datatracker.ietf.org/doc/html/rfc8018>
//! - RFC 6070: PKCS #5: PBKDF2 Test Vectors
//!   <https://datatracker.ietf.org/doc/html/rfc6070>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod pbkdf2;

pub use keyforge_core::{DerivedKey, HashSpec, KdfError};
pub use pbkdf2::{derive, derive_into};
