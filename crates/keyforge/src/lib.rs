// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>HKDF and PBKDF2 over HMAC, with the hash picked at runtime.</em></p>
//!
//! ---
//!
//! Keyforge derives keys from input keying material or passwords. Both
//! functions are built on one HMAC pseudorandom function and share a single
//! error type and a single set of output length bounds.
//!
//! # Features
//!
//! - **HKDF** (RFC 5869): extract-then-expand, up to `255 * HashLen` bytes
//! - **PBKDF2** (RFC 8018): iterated HMAC, up to `(2^32 - 1) * HashLen` bytes
//! - **Selectable hash**: SHA-1, SHA-224, SHA-256, SHA-384 and SHA-512
//! - **Zeroize on drop**: `Prk`, `Okm` and `DerivedKey` wipe themselves, compare
//!   in constant time and never print their contents
//! - **`no_std` compatible**: only `alloc` is required
//!
//! # Quick Start
//!
//! ```rust
//! use keyforge::{HashSpec, hkdf, pbkdf2};
//!
//! // Session keys from a shared secret
//! let (prk, okm) = hkdf::derive(b"salt", b"shared secret", b"session", 32, HashSpec::Sha256)?;
//! assert_eq!(prk.len(), 32);
//! assert_eq!(okm.len(), 32);
//!
//! // A key from a password
//! let key = pbkdf2::derive(b"hunter2", b"per-user salt", 10_000, 32, HashSpec::Sha512)?;
//! assert_eq!(key.len(), 32);
//! # Ok::<(), keyforge::KdfError>(())
//! ```
//!
//! # Choosing a hash by name
//!
//! ```rust
//! use keyforge::{HashSpec, KdfError};
//!
//! let hash: HashSpec = "sha-384".parse()?;
//! assert_eq!(hash.digest_len(), 48);
//!
//! assert!(matches!("md5".parse::<HashSpec>(), Err(KdfError::UnsupportedHash { .. })));
//! # Ok::<(), KdfError>(())
//! ```
//!
//! # Errors
//!
//! Every precondition is checked before any HMAC is computed:
//!
//! | Error | Raised by | Condition |
//! |-------|-----------|-----------|
//! | [`KdfError::KeyTooLong`] | HKDF | `L > 255 * HashLen` |
//! | [`KdfError::KeyTooLong`] | PBKDF2 | `dkLen > (2^32 - 1) * HashLen` |
//! | [`KdfError::InvalidIterationCount`] | PBKDF2 | `c == 0` |
//! | [`KdfError::UnsupportedHash`] | [`HashSpec`] parsing | unknown name |
//! | [`KdfError::OutputBufferLength`] | [`Prf::compute_into`] | `out.len() != HashLen` |
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]

pub use keyforge_core::limits;
pub use keyforge_core::{
    DerivedKey, HashSpec, KdfError, Okm, Prf, Prk, output_length, prf,
};
pub use keyforge_hkdf as hkdf;
pub use keyforge_pbkdf2 as pbkdf2;
