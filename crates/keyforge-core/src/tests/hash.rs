// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::KdfError;
use crate::hash::HashSpec;

#[test]
fn test_digest_lengths() {
    assert_eq!(HashSpec::Sha1.digest_len(), 20);
    assert_eq!(HashSpec::Sha224.digest_len(), 28);
    assert_eq!(HashSpec::Sha256.digest_len(), 32);
    assert_eq!(HashSpec::Sha384.digest_len(), 48);
    assert_eq!(HashSpec::Sha512.digest_len(), 64);
}

#[test]
fn test_block_lengths() {
    assert_eq!(HashSpec::Sha1.block_len(), 64);
    assert_eq!(HashSpec::Sha256.block_len(), 64);
    assert_eq!(HashSpec::Sha384.block_len(), 128);
    assert_eq!(HashSpec::Sha512.block_len(), 128);
}

#[test]
fn test_max_digest_len_covers_all() {
    for hash in HashSpec::ALL {
        assert!(hash.digest_len() > 0);
        assert!(hash.digest_len() <= HashSpec::MAX_DIGEST_LEN);
    }
    assert!(HashSpec::ALL.iter().any(|h| h.digest_len() == HashSpec::MAX_DIGEST_LEN));
}

#[test]
fn test_display_roundtrips_through_from_str() {
    for hash in HashSpec::ALL {
        let name = hash.to_string();
        assert_eq!(name.parse::<HashSpec>(), Ok(hash));
    }
}

#[test]
fn test_from_str_accepts_common_spellings() {
    let cases = [
        ("sha1", HashSpec::Sha1),
        ("SHA-1", HashSpec::Sha1),
        ("sha-224", HashSpec::Sha224),
        ("Sha256", HashSpec::Sha256),
        ("sha256", HashSpec::Sha256),
        ("  SHA-384 ", HashSpec::Sha384),
        ("sha512", HashSpec::Sha512),
    ];

    for (name, expected) in cases {
        assert_eq!(name.parse::<HashSpec>(), Ok(expected), "{name:?}");
    }
}

#[test]
fn test_from_str_unsupported() {
    for name in ["md5", "sha3-256", "sha", "", "sha-", "sha--256", "blake2b"] {
        assert_eq!(
            name.parse::<HashSpec>(),
            Err(KdfError::UnsupportedHash { name: name.into() }),
            "{name:?}"
        );
    }
}

#[test]
fn test_from_str_non_ascii_does_not_panic() {
    assert!("shä256".parse::<HashSpec>().is_err());
    assert!("ßha256".parse::<HashSpec>().is_err());
    assert!("s€56".parse::<HashSpec>().is_err());
}
