// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC pseudorandom function per RFC 2104

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

use crate::error::KdfError;
use crate::hash::HashSpec;

/// HMAC state already keyed with the PRF key.
#[derive(Clone)]
enum KeyedHmac {
    Sha1(Hmac<Sha1>),
    Sha224(Hmac<Sha224>),
    Sha256(Hmac<Sha256>),
    Sha384(Hmac<Sha384>),
    Sha512(Hmac<Sha512>),
}

fn keyed<M: Mac + KeyInit>(key: &[u8]) -> M {
    match <M as Mac>::new_from_slice(key) {
        Ok(mac) => mac,
        // Keys longer than the block size are hashed, shorter ones zero-padded.
        Err(_) => unreachable!("HMAC accepts keys of any length"),
    }
}

fn finish<M: Mac + Clone>(keyed: &M, parts: &[&[u8]], out: &mut [u8]) {
    let mut mac = keyed.clone();
    for part in parts {
        mac.update(part);
    }
    out.copy_from_slice(&mac.finalize().into_bytes());
}

/// HMAC keyed once, evaluated on any number of messages.
///
/// Keying HMAC hashes (or pads) the key and absorbs the inner and outer pads.
/// `Prf` does that once and clones the keyed state per evaluation, which is
/// what makes PBKDF2 with large iteration counts affordable.
#[derive(Clone)]
pub struct Prf {
    hash: HashSpec,
    keyed: KeyedHmac,
}

impl Prf {
    /// Key HMAC-`hash` with `key`. Any key length is accepted.
    pub fn new(hash: HashSpec, key: &[u8]) -> Self {
        let keyed = match hash {
            HashSpec::Sha1 => KeyedHmac::Sha1(keyed(key)),
            HashSpec::Sha224 => KeyedHmac::Sha224(keyed(key)),
            HashSpec::Sha256 => KeyedHmac::Sha256(keyed(key)),
            HashSpec::Sha384 => KeyedHmac::Sha384(keyed(key)),
            HashSpec::Sha512 => KeyedHmac::Sha512(keyed(key)),
        };

        Self { hash, keyed }
    }

    /// Hash function this PRF is built on.
    pub fn hash(&self) -> HashSpec {
        self.hash
    }

    /// Output length in bytes (the digest length of the hash).
    pub fn output_len(&self) -> usize {
        self.hash.digest_len()
    }

    /// HMAC over the concatenation of `parts`, written to `out`.
    ///
    /// The concatenation is streamed into HMAC, never materialised. Fails with
    /// [`KdfError::OutputBufferLength`] unless `out.len()` equals
    /// [`output_len`](Self::output_len); `out` is untouched on failure.
    pub fn compute_into(&self, parts: &[&[u8]], out: &mut [u8]) -> Result<(), KdfError> {
        if out.len() != self.output_len() {
            return Err(KdfError::OutputBufferLength {
                expected: self.output_len(),
                actual: out.len(),
            });
        }

        self.finish_into(parts, out);
        Ok(())
    }

    /// HMAC over `message`.
    pub fn compute(&self, message: &[u8]) -> Vec<u8> {
        let mut out = vec![0u8; self.output_len()];
        self.finish_into(&[message], &mut out);
        out
    }

    /// `out` must be exactly `output_len()` bytes.
    fn finish_into(&self, parts: &[&[u8]], out: &mut [u8]) {
        match &self.keyed {
            KeyedHmac::Sha1(mac) => finish(mac, parts, out),
            KeyedHmac::Sha224(mac) => finish(mac, parts, out),
            KeyedHmac::Sha256(mac) => finish(mac, parts, out),
            KeyedHmac::Sha384(mac) => finish(mac, parts, out),
            KeyedHmac::Sha512(mac) => finish(mac, parts, out),
        }
    }
}

impl fmt::Debug for Prf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prf")
            .field("hash", &self.hash)
            .finish_non_exhaustive()
    }
}

/// `HMAC-hash(key, message)`. Returns exactly `hash.digest_len()` bytes.
pub fn prf(key: &[u8], message: &[u8], hash: HashSpec) -> Vec<u8> {
    Prf::new(hash, key).compute(message)
}

/// PRF output length for `hash`, in bytes.
pub fn output_length(hash: HashSpec) -> usize {
    hash.digest_len()
}
