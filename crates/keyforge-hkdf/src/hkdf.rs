// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HKDF per RFC 5869

use alloc::vec;
use zeroize::Zeroizing;

use keyforge_core::limits;
use keyforge_core::{HashSpec, KdfError, Okm, Prf, Prk};

/// Stand-in for an empty salt: HashLen zero octets (RFC 5869 Section 2.2).
const DEFAULT_SALT: [u8; HashSpec::MAX_DIGEST_LEN] = [0u8; HashSpec::MAX_DIGEST_LEN];

/// HKDF-Extract per RFC 5869 Section 2.2
///
/// `PRK = HMAC-Hash(salt, IKM)`. An empty `salt` is replaced by
/// `hash.digest_len()` zero bytes. Never fails.
pub fn extract(salt: &[u8], ikm: &[u8], hash: HashSpec) -> Prk {
    let salt = if salt.is_empty() {
        &DEFAULT_SALT[..hash.digest_len()]
    } else {
        salt
    };

    Prk::from_vec(Prf::new(hash, salt).compute(ikm))
}

/// Expand with an already keyed PRF. Length must be validated by the caller.
fn expand_with(prf: &Prf, info: &[u8], okm: &mut [u8]) -> Result<(), KdfError> {
    let hash_len = prf.output_len();

    // T(i-1) and T(i)
    let mut t_prev = Zeroizing::new(vec![0u8; hash_len]);
    let mut t_curr = Zeroizing::new(vec![0u8; hash_len]);

    // T(0) = empty string
    let mut t_prev_len = 0;

    // At most 255 chunks once the length check passed, so the counter never wraps.
    for (chunk, counter) in okm.chunks_mut(hash_len).zip(1..=u8::MAX) {
        // T(i) = HMAC-Hash(PRK, T(i-1) | info | i)
        prf.compute_into(&[&t_prev[..t_prev_len], info, &[counter]], &mut t_curr)?;

        chunk.copy_from_slice(&t_curr[..chunk.len()]);

        core::mem::swap(&mut t_prev, &mut t_curr);
        t_prev_len = hash_len;
    }

    Ok(())
}

/// HKDF-Expand per RFC 5869 Section 2.3, into a caller buffer.
///
/// Fills all of `okm`. Fails with [`KdfError::KeyTooLong`] when
/// `okm.len() > 255 * hash.digest_len()`, before any PRF call.
pub fn expand_into(
    prk: &[u8],
    info: &[u8],
    hash: HashSpec,
    okm: &mut [u8],
) -> Result<(), KdfError> {
    limits::ensure_hkdf_len(okm.len(), hash)?;

    // Valid, but nothing to compute
    if okm.is_empty() {
        return Ok(());
    }

    expand_with(&Prf::new(hash, prk), info, okm)
}

/// HKDF-Expand per RFC 5869 Section 2.3
///
/// N = ceil(L/HashLen)
/// T(0) = empty string
/// T(i) = HMAC-Hash(PRK, T(i-1) | info | i)
/// OKM = first L octets of T(1) | T(2) | ... | T(N)
pub fn expand(
    prk: &[u8],
    info: &[u8],
    key_length: usize,
    hash: HashSpec,
) -> Result<Okm, KdfError> {
    limits::ensure_hkdf_len(key_length, hash)?;

    let mut okm = vec![0u8; key_length];
    expand_into(prk, info, hash, &mut okm)?;

    Ok(Okm::from_vec(okm))
}

/// Full HKDF: Extract-then-Expand, returning both PRK and OKM.
///
/// The length is checked first, so a failing call runs no PRF at all.
pub fn derive(
    salt: &[u8],
    ikm: &[u8],
    info: &[u8],
    key_length: usize,
    hash: HashSpec,
) -> Result<(Prk, Okm), KdfError> {
    limits::ensure_hkdf_len(key_length, hash)?;

    let prk = extract(salt, ikm, hash);
    let okm = expand(prk.as_bytes(), info, key_length, hash)?;

    Ok((prk, okm))
}

/// Full HKDF into a caller buffer. Returns the PRK.
pub fn derive_into(
    salt: &[u8],
    ikm: &[u8],
    info: &[u8],
    hash: HashSpec,
    okm: &mut [u8],
) -> Result<Prk, KdfError> {
    limits::ensure_hkdf_len(okm.len(), hash)?;

    let prk = extract(salt, ikm, hash);
    expand_into(prk.as_bytes(), info, hash, okm)?;

    Ok(prk)
}

/// Extracted HKDF state for deriving several sub-keys from one PRK.
///
/// ```
/// use keyforge_hkdf::{HashSpec, Hkdf};
///
/// let hkdf = Hkdf::extract(HashSpec::Sha256, b"salt", b"shared secret");
/// let enc = hkdf.expand(b"encryption", 32).expect("within bound");
/// let mac = hkdf.expand(b"authentication", 32).expect("within bound");
///
/// assert_ne!(enc, mac);
/// ```
#[derive(Clone, Debug)]
pub struct Hkdf {
    prk: Prk,
    prf: Prf,
}

impl Hkdf {
    /// Run HKDF-Extract and keep the PRK.
    pub fn extract(hash: HashSpec, salt: &[u8], ikm: &[u8]) -> Self {
        Self::with_prk(hash, extract(salt, ikm, hash))
    }

    /// Start from an existing PRK (e.g. one produced elsewhere).
    pub fn from_prk(hash: HashSpec, prk: &[u8]) -> Self {
        Self::with_prk(hash, Prk::from_vec(prk.to_vec()))
    }

    fn with_prk(hash: HashSpec, prk: Prk) -> Self {
        let prf = Prf::new(hash, prk.as_bytes());
        Self { prk, prf }
    }

    /// Hash function in use.
    pub fn hash(&self) -> HashSpec {
        self.prf.hash()
    }

    /// The pseudorandom key.
    pub fn prk(&self) -> &Prk {
        &self.prk
    }

    /// HKDF-Expand into a caller buffer.
    pub fn expand_into(&self, info: &[u8], okm: &mut [u8]) -> Result<(), KdfError> {
        limits::ensure_hkdf_len(okm.len(), self.hash())?;
        expand_with(&self.prf, info, okm)
    }

    /// HKDF-Expand `key_length` bytes.
    pub fn expand(&self, info: &[u8], key_length: usize) -> Result<Okm, KdfError> {
        limits::ensure_hkdf_len(key_length, self.hash())?;

        let mut okm = vec![0u8; key_length];
        expand_with(&self.prf, info, &mut okm)?;

        Ok(Okm::from_vec(okm))
    }
}
