// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PBKDF2 per RFC 8018 Section 5.2
//!
//! DK = T_1 || T_2 || ... || T_l, truncated to dkLen
//! T_i = F(P, S, c, i) = U_1 ^ U_2 ^ ... ^ U_c
//! U_1 = PRF(P, S || INT(i))
//! U_j = PRF(P, U_{j-1})

use alloc::vec;
use zeroize::Zeroizing;

use keyforge_core::limits;
use keyforge_core::{DerivedKey, HashSpec, KdfError, Prf};

pub(crate) fn validate(iterations: usize, key_length: usize, hash: HashSpec) -> Result<(), KdfError> {
    if iterations == 0 {
        return Err(KdfError::InvalidIterationCount);
    }

    limits::ensure_pbkdf2_len(key_length, hash)
}

/// acc ^= block, bytewise. No data-dependent branches.
fn xor_into(acc: &mut [u8], block: &[u8]) {
    for (a, b) in acc.iter_mut().zip(block) {
        *a ^= b;
    }
}

/// PBKDF2 into a caller buffer. Fills all of `out`.
///
/// Fails with [`KdfError::InvalidIterationCount`] when `iterations == 0` and
/// with [`KdfError::KeyTooLong`] when `out.len() > (2^32 - 1) * hash.digest_len()`.
/// Both are checked before any PRF call; `out` is untouched on failure.
pub fn derive_into(
    password: &[u8],
    salt: &[u8],
    iterations: usize,
    hash: HashSpec,
    out: &mut [u8],
) -> Result<(), KdfError> {
    validate(iterations, out.len(), hash)?;

    // Valid, but nothing to compute
    if out.is_empty() {
        return Ok(());
    }

    let prf = Prf::new(hash, password);
    let hash_len = prf.output_len();

    // U_{j-1}, U_j and the running T_i
    let mut u_prev = Zeroizing::new(vec![0u8; hash_len]);
    let mut u_curr = Zeroizing::new(vec![0u8; hash_len]);
    let mut t = Zeroizing::new(vec![0u8; hash_len]);

    // Block count fits in u32 once the length check passed.
    for (chunk, block_index) in out.chunks_mut(hash_len).zip(1..=u32::MAX) {
        // U_1 = PRF(P, S || INT(i)), INT is 4-byte big-endian
        prf.compute_into(&[salt, &block_index.to_be_bytes()], &mut u_prev)?;
        t.copy_from_slice(&u_prev[..]);

        for _ in 1..iterations {
            // U_j = PRF(P, U_{j-1})
            prf.compute_into(&[u_prev.as_slice()], &mut u_curr)?;
            xor_into(&mut t, &u_curr[..]);

            core::mem::swap(&mut u_prev, &mut u_curr);
        }

        chunk.copy_from_slice(&t[..chunk.len()]);
    }

    Ok(())
}

/// PBKDF2 deriving `key_length` bytes.
///
/// Any `iterations >= 1` is run in full; there is no upper cap beyond `usize`.
///
/// Parameters are validated before the output is allocated, so an oversized
/// `key_length` fails without reserving memory.
pub fn derive(
    password: &[u8],
    salt: &[u8],
    iterations: usize,
    key_length: usize,
    hash: HashSpec,
) -> Result<DerivedKey, KdfError> {
    validate(iterations, key_length, hash)?;

    let mut dk = vec![0u8; key_length];
    derive_into(password, salt, iterations, hash, &mut dk)?;

    Ok(DerivedKey::from_vec(dk))
}
