// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Output length bounds.
//!
//! Both KDFs emit PRF-sized blocks tagged with a counter, so the largest
//! output is `max_blocks * digest_len`:
//!
//! | KDF    | Counter              | Max blocks  |
//! |--------|----------------------|-------------|
//! | HKDF   | single octet, 1..=255 | 255         |
//! | PBKDF2 | 32-bit big-endian    | 2^32 - 1    |
//!
//! Bounds are computed in `u64` so they are exact on 32-bit targets too.

use crate::error::KdfError;
use crate::hash::HashSpec;

/// RFC 5869 Section 2.3: `L <= 255 * HashLen`
pub const HKDF_MAX_BLOCKS: u64 = 255;

/// RFC 8018 Section 5.2: `dkLen <= (2^32 - 1) * hLen`
pub const PBKDF2_MAX_BLOCKS: u64 = u32::MAX as u64;

/// Largest output length in bytes for `max_blocks` blocks of `hash`.
pub const fn max_output_len(max_blocks: u64, hash: HashSpec) -> u64 {
    max_blocks * hash.digest_len() as u64
}

/// Largest HKDF-Expand output for `hash`.
pub const fn hkdf_max_len(hash: HashSpec) -> u64 {
    max_output_len(HKDF_MAX_BLOCKS, hash)
}

/// Largest PBKDF2 output for `hash`.
pub const fn pbkdf2_max_len(hash: HashSpec) -> u64 {
    max_output_len(PBKDF2_MAX_BLOCKS, hash)
}

/// Number of PRF blocks needed to produce `len` bytes of `hash` output.
pub const fn blocks_needed(len: usize, hash: HashSpec) -> usize {
    len.div_ceil(hash.digest_len())
}

/// Fails with [`KdfError::KeyTooLong`] if `requested` exceeds `max_blocks` blocks.
pub fn ensure_output_len(
    requested: usize,
    max_blocks: u64,
    hash: HashSpec,
) -> Result<(), KdfError> {
    let max = max_output_len(max_blocks, hash);

    if requested as u64 > max {
        return Err(KdfError::KeyTooLong { requested, max });
    }

    Ok(())
}

/// HKDF-Expand length precondition.
pub fn ensure_hkdf_len(requested: usize, hash: HashSpec) -> Result<(), KdfError> {
    ensure_output_len(requested, HKDF_MAX_BLOCKS, hash)
}

/// PBKDF2 length precondition.
pub fn ensure_pbkdf2_len(requested: usize, hash: HashSpec) -> Result<(), KdfError> {
    ensure_output_len(requested, PBKDF2_MAX_BLOCKS, hash)
}
