// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HKDF implementation per RFC 5869
//!
//! Extract-then-expand over HMAC with a selectable hash function. Every
//! intermediate block is zeroized once it is no longer needed.
//!
//! ```
//! use keyforge_hkdf::{HashSpec, derive};
//!
//! let (prk, okm) = derive(b"salt", b"input key material", b"context", 42, HashSpec::Sha256)
//!     .expect("42 bytes is within 255 * 32");
//!
//! assert_eq!(prk.len(), 32);
//! assert_eq!(okm.len(), 42);
//! ```
//!
//! References:
//! - RFC 5869: HMAC-based Extract-and-Expand Key Derivation Function (HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc5869>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod hkdf;

pub use hkdf::{Hkdf, derive, derive_into, expand, expand_into, extract};
pub use keyforge_core::{HashSpec, KdfError, Okm, Prk};
