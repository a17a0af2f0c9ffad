// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for HKDF extract / expand / derive

use keyforge_core::limits::hkdf_max_len;
use keyforge_test_utils::hex_to_bytes;

use crate::hkdf::{derive, derive_into, expand, expand_into, extract};
use crate::{HashSpec, KdfError};

#[test]
fn test_extract_output_is_digest_len() {
    for hash in HashSpec::ALL {
        let prk = extract(b"salt", b"ikm", hash);
        assert_eq!(prk.len(), hash.digest_len(), "{hash}");
    }
}

#[test]
fn test_extract_empty_salt_equals_zero_salt() {
    let ikm = [0x0bu8; 22];

    for hash in HashSpec::ALL {
        let zeros = vec![0u8; hash.digest_len()];
        assert_eq!(extract(&[], &ikm, hash), extract(&zeros, &ikm, hash), "{hash}");
    }
}

/// The default salt is zero octets, not the ASCII digit '0'.
#[test]
fn test_extract_default_salt_is_not_ascii_zero() {
    let ikm = [0x0bu8; 22];

    for hash in HashSpec::ALL {
        let ascii_zeros = vec![b'0'; hash.digest_len()];
        assert_ne!(extract(&[], &ikm, hash), extract(&ascii_zeros, &ikm, hash), "{hash}");
    }
}

#[test]
fn test_hkdf_basic() {
    let ikm = [0x0bu8; 22];
    let salt = [0x00u8; 13];
    let info = [0xf0u8; 10];

    let (prk, okm) = derive(&salt, &ikm, &info, 42, HashSpec::Sha256).expect("Failed to derive(..)");

    // Output should be deterministic
    let (prk2, okm2) = derive(&salt, &ikm, &info, 42, HashSpec::Sha256).expect("Failed to derive(..)");
    assert_eq!(prk, prk2);
    assert_eq!(okm, okm2);
}

/// Expand accepts any PRK, not only one produced by Extract.
#[test]
fn test_expand_short_prk() {
    let okm = expand(b"pseudorandomkey", b"makis", 5, HashSpec::Sha256).expect("Failed to expand(..)");
    assert_eq!(okm.as_bytes(), hex_to_bytes("aba7e7a3fc").as_slice());

    let okm = expand(b"pseudorandomkey", b"makis", 40, HashSpec::Sha256).expect("Failed to expand(..)");
    assert_eq!(
        okm.as_bytes(),
        hex_to_bytes(
            "aba7e7a3fc535a70f87e328279467c93d92e2f9fd08f1d1eee00b93e8a885163\
             60b03b00494af89c"
        )
        .as_slice()
    );
}

#[test]
fn test_expand_output_lengths() {
    let prk = extract(b"salt", b"input key material", HashSpec::Sha256);

    for len in [1, 16, 31, 32, 33, 64, 100, 1024] {
        let okm = expand(prk.as_bytes(), b"ctx", len, HashSpec::Sha256).expect("Failed to expand(..)");
        assert_eq!(okm.len(), len);
    }
}

#[test]
fn test_expand_output_max() {
    for hash in HashSpec::ALL {
        let prk = extract(b"salt", b"ikm", hash);
        let max = 255 * hash.digest_len();

        let okm = expand(prk.as_bytes(), b"info", max, hash).expect("Failed to expand(..)");
        assert_eq!(okm.len(), max);
    }
}

#[test]
fn test_expand_output_too_long() {
    for hash in HashSpec::ALL {
        let prk = extract(b"salt", b"ikm", hash);
        let requested = 255 * hash.digest_len() + 1;

        let result = expand(prk.as_bytes(), b"info", requested, hash);
        assert_eq!(
            result,
            Err(KdfError::KeyTooLong {
                requested,
                max: hkdf_max_len(hash),
            })
        );
    }
}

#[test]
fn test_expand_into_too_long_leaves_buffer_untouched() {
    let mut okm = vec![0xaau8; 255 * 32 + 1];
    let result = expand_into(&[0x01; 32], b"info", HashSpec::Sha256, &mut okm);

    assert!(matches!(result, Err(KdfError::KeyTooLong { .. })));
    assert!(okm.iter().all(|b| *b == 0xaa));
}

#[test]
fn test_derive_too_long() {
    let result = derive(b"salt", b"ikm", b"info", 255 * 20 + 1, HashSpec::Sha1);
    assert!(matches!(result, Err(KdfError::KeyTooLong { requested, .. }) if requested == 5101));
}

#[test]
fn test_hkdf_empty_output() {
    let (prk, okm) = derive(&[], b"ikm", &[], 0, HashSpec::Sha256).expect("Failed to derive(..)");
    assert_eq!(prk.len(), 32);
    assert!(okm.is_empty());

    let mut empty = [0u8; 0];
    expand_into(prk.as_bytes(), &[], HashSpec::Sha256, &mut empty).expect("Failed to expand_into(..)");
}

#[test]
fn test_hkdf_different_info_different_output() {
    let ikm = b"same ikm";
    let salt = b"same salt";

    let (_, okm1) = derive(salt, ikm, b"info1", 32, HashSpec::Sha256).expect("Failed to derive(..)");
    let (_, okm2) = derive(salt, ikm, b"info2", 32, HashSpec::Sha256).expect("Failed to derive(..)");

    assert_ne!(okm1, okm2);
}

#[test]
fn test_hkdf_different_salt_different_output() {
    let ikm = b"same ikm";
    let info = b"same info";

    let (prk1, okm1) = derive(b"salt1", ikm, info, 32, HashSpec::Sha256).expect("Failed to derive(..)");
    let (prk2, okm2) = derive(b"salt2", ikm, info, 32, HashSpec::Sha256).expect("Failed to derive(..)");

    assert_ne!(prk1, prk2);
    assert_ne!(okm1, okm2);
}

#[test]
fn test_hkdf_different_hash_different_output() {
    let (_, okm256) = derive(b"salt", b"ikm", b"info", 20, HashSpec::Sha256).expect("Failed to derive(..)");
    let (_, okm1) = derive(b"salt", b"ikm", b"info", 20, HashSpec::Sha1).expect("Failed to derive(..)");

    assert_ne!(okm256.as_bytes(), okm1.as_bytes());
}

/// Salt longer than the block size triggers HMAC key hashing
#[test]
fn test_hkdf_long_salt() {
    let ikm = b"input key material";
    let info = b"context";

    for hash in HashSpec::ALL {
        let long_salt = vec![0x42u8; hash.block_len() + 1];
        let short_salt = vec![0x42u8; hash.block_len()];

        let (_, okm) = derive(&long_salt, ikm, info, 32, hash).expect("Failed to derive(..)");
        let (_, okm2) = derive(&long_salt, ikm, info, 32, hash).expect("Failed to derive(..)");
        assert_eq!(okm, okm2);

        let (_, okm_short) = derive(&short_salt, ikm, info, 32, hash).expect("Failed to derive(..)");
        assert_ne!(okm, okm_short);
    }
}

/// A dirty, reused buffer must not leak into the next derivation.
#[test]
fn test_derive_into_reused_buffer() {
    let mut reused = vec![0u8; 100];

    let inputs: [(&[u8], &[u8]); 3] = [(b"salt-a", b"ikm-a"), (b"salt-b", b"ikm-b"), (b"", b"ikm-c")];

    for (salt, ikm) in inputs {
        reused.fill(0x5a);
        derive_into(salt, ikm, b"info", HashSpec::Sha256, &mut reused).expect("Failed to derive_into(..)");

        let mut fresh = vec![0u8; 100];
        derive_into(salt, ikm, b"info", HashSpec::Sha256, &mut fresh).expect("Failed to derive_into(..)");

        let (_, okm) = derive(salt, ikm, b"info", 100, HashSpec::Sha256).expect("Failed to derive(..)");

        assert_eq!(reused, fresh);
        assert_eq!(okm.as_bytes(), fresh.as_slice());
    }
}

/// Blocks chain T(i-1) into T(i): a longer output extends a shorter one.
#[test]
fn test_expand_shorter_is_prefix_of_longer() {
    let prk = extract(b"salt", b"ikm", HashSpec::Sha512);

    let short = expand(prk.as_bytes(), b"info", 70, HashSpec::Sha512).expect("Failed to expand(..)");
    let long = expand(prk.as_bytes(), b"info", 200, HashSpec::Sha512).expect("Failed to expand(..)");

    assert_eq!(short.as_bytes(), &long.as_bytes()[..70]);
}

#[test]
fn test_okm_debug_is_redacted() {
    let (prk, okm) = derive(b"salt", b"ikm", b"info", 42, HashSpec::Sha256).expect("Failed to derive(..)");

    assert_eq!(format!("{:?}", prk), "Prk([REDACTED; 32 bytes])");
    assert_eq!(format!("{:?}", okm), "Okm([REDACTED; 42 bytes])");
}
