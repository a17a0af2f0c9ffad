// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared building blocks for the keyforge key derivation functions.
//!
//! - [`HashSpec`]: closed set of supported hash functions with static digest lengths
//! - [`Prf`] / [`prf`]: HMAC (RFC 2104) used as a pseudorandom function
//! - [`KdfError`]: precondition failures reported by every KDF
//! - [`limits`]: output length bounds for HKDF and PBKDF2
//! - [`Prk`], [`Okm`], [`DerivedKey`]: zeroize-on-drop output containers
//!
//! References:
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod hash;
pub mod limits;
mod prf;
mod secret;

pub use error::KdfError;
pub use hash::HashSpec;
pub use prf::{Prf, output_length, prf};
pub use secret::{DerivedKey, Okm, Prk};
