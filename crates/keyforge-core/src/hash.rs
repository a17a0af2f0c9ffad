// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hash function selection

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::error::KdfError;

/// Hash function underlying the HMAC pseudorandom function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashSpec {
    /// SHA-1 (RFC 3174). Kept for RFC 6070 / legacy PBKDF2 interop.
    Sha1,
    /// SHA-224 (FIPS 180-4)
    Sha224,
    /// SHA-256 (FIPS 180-4)
    Sha256,
    /// SHA-384 (FIPS 180-4)
    Sha384,
    /// SHA-512 (FIPS 180-4)
    Sha512,
}

impl HashSpec {
    /// Every supported hash function.
    pub const ALL: [HashSpec; 5] = [
        HashSpec::Sha1,
        HashSpec::Sha224,
        HashSpec::Sha256,
        HashSpec::Sha384,
        HashSpec::Sha512,
    ];

    /// Largest digest length across [`HashSpec::ALL`] (SHA-512).
    pub const MAX_DIGEST_LEN: usize = 64;

    /// Digest (and PRF output) length in bytes.
    pub const fn digest_len(self) -> usize {
        match self {
            HashSpec::Sha1 => 20,
            HashSpec::Sha224 => 28,
            HashSpec::Sha256 => 32,
            HashSpec::Sha384 => 48,
            HashSpec::Sha512 => 64,
        }
    }

    /// Internal block length in bytes. HMAC keys longer than this are hashed first.
    pub const fn block_len(self) -> usize {
        match self {
            HashSpec::Sha1 | HashSpec::Sha224 | HashSpec::Sha256 => 64,
            HashSpec::Sha384 | HashSpec::Sha512 => 128,
        }
    }

    /// Canonical name, e.g. `SHA-256`.
    pub const fn name(self) -> &'static str {
        match self {
            HashSpec::Sha1 => "SHA-1",
            HashSpec::Sha224 => "SHA-224",
            HashSpec::Sha256 => "SHA-256",
            HashSpec::Sha384 => "SHA-384",
            HashSpec::Sha512 => "SHA-512",
        }
    }
}

impl fmt::Display for HashSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashSpec {
    type Err = KdfError;

    /// Accepts `sha256`, `SHA-256`, `sha-256` and so on, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        HashSpec::ALL
            .into_iter()
            .find(|hash| {
                let canonical = hash.name();
                trimmed.eq_ignore_ascii_case(canonical)
                    || eq_ignore_ascii_case_without_dash(trimmed, canonical)
            })
            .ok_or_else(|| KdfError::UnsupportedHash {
                name: s.to_string(),
            })
    }
}

/// Compares `input` against `canonical` with the dash after the `SHA` prefix removed.
fn eq_ignore_ascii_case_without_dash(input: &str, canonical: &str) -> bool {
    match canonical.split_once('-') {
        Some((prefix, suffix)) => {
            input.len() == prefix.len() + suffix.len()
                && input.is_char_boundary(prefix.len())
                && input[..prefix.len()].eq_ignore_ascii_case(prefix)
                && input[prefix.len()..].eq_ignore_ascii_case(suffix)
        }
        None => false,
    }
}
