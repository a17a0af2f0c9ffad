// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RFC 5869 Appendix A test cases

use keyforge_core::{HashSpec, KdfError};
use keyforge_test_utils::{bytes_to_hex, hex_to_bytes};

/// A single HKDF test case. Byte fields are hex.
#[derive(Debug, Clone, Copy)]
pub struct HkdfCase {
    /// Test case identifier, e.g. `RFC 5869 A.1`
    pub name: &'static str,
    /// Hash underlying HMAC
    pub hash: HashSpec,
    /// Input keying material
    pub ikm: &'static str,
    /// Salt (empty means "not provided")
    pub salt: &'static str,
    /// Context and application specific information
    pub info: &'static str,
    /// Output length L in bytes
    pub length: usize,
    /// Expected pseudorandom key
    pub prk: &'static str,
    /// Expected output keying material
    pub okm: &'static str,
}

const IKM_LONG: &str = "\
    000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f\
    202122232425262728292a2b2c2d2e2f303132333435363738393a3b3c3d3e3f\
    404142434445464748494a4b4c4d4e4f";

const SALT_LONG: &str = "\
    606162636465666768696a6b6c6d6e6f707172737475767778797a7b7c7d7e7f\
    808182838485868788898a8b8c8d8e8f909192939495969798999a9b9c9d9e9f\
    a0a1a2a3a4a5a6a7a8a9aaabacadaeaf";

const INFO_LONG: &str = "\
    b0b1b2b3b4b5b6b7b8b9babbbcbdbebfc0c1c2c3c4c5c6c7c8c9cacbcccdcecf\
    d0d1d2d3d4d5d6d7d8d9dadbdcdddedfe0e1e2e3e4e5e6e7e8e9eaebecedeeef\
    f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff";

const IKM_0B_22: &str = "0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b";

/// RFC 5869 Appendix A.1 - A.7
pub const RFC5869: &[HkdfCase] = &[
    HkdfCase {
        name: "RFC 5869 A.1 (SHA-256, basic)",
        hash: HashSpec::Sha256,
        ikm: IKM_0B_22,
        salt: "000102030405060708090a0b0c",
        info: "f0f1f2f3f4f5f6f7f8f9",
        length: 42,
        prk: "077709362c2e32df0ddc3f0dc47bba6390b6c73bb50f9c3122ec844ad7c2b3e5",
        okm: "\
            3cb25f25faacd57a90434f64d0362f2a2d2d0a90cf1a5a4c5db02d56ecc4c5bf\
            34007208d5b887185865",
    },
    HkdfCase {
        name: "RFC 5869 A.2 (SHA-256, long inputs)",
        hash: HashSpec::Sha256,
        ikm: IKM_LONG,
        salt: SALT_LONG,
        info: INFO_LONG,
        length: 82,
        prk: "06a6b88c5853361a06104c9ceb35b45cef760014904671014a193f40c15fc244",
        okm: "\
            b11e398dc80327a1c8e7f78c596a49344f012eda2d4efad8a050cc4c19afa97c\
            59045a99cac7827271cb41c65e590e09da3275600c2f09b8367793a9aca3db71\
            cc30c58179ec3e87c14c01d5c1f3434f1d87",
    },
    HkdfCase {
        name: "RFC 5869 A.3 (SHA-256, zero-length salt/info)",
        hash: HashSpec::Sha256,
        ikm: IKM_0B_22,
        salt: "",
        info: "",
        length: 42,
        prk: "19ef24a32c717b167f33a91d6f648bdf96596776afdb6377ac434c1c293ccb04",
        okm: "\
            8da4e775a563c18f715f802a063c5a31b8a11f5c5ee1879ec3454e5f3c738d2d\
            9d201395faa4b61a96c8",
    },
    HkdfCase {
        name: "RFC 5869 A.4 (SHA-1, basic)",
        hash: HashSpec::Sha1,
        ikm: "0b0b0b0b0b0b0b0b0b0b0b",
        salt: "000102030405060708090a0b0c",
        info: "f0f1f2f3f4f5f6f7f8f9",
        length: 42,
        prk: "9b6c18c432a7bf8f0e71c8eb88f4b30baa2ba243",
        okm: "\
            085a01ea1b10f36933068b56efa5ad81a4f14b822f5b091568a9cdd4f155fda2\
            c22e422478d305f3f896",
    },
    HkdfCase {
        name: "RFC 5869 A.5 (SHA-1, long inputs)",
        hash: HashSpec::Sha1,
        ikm: IKM_LONG,
        salt: SALT_LONG,
        info: INFO_LONG,
        length: 82,
        prk: "8adae09a2a307059478d309b26c4115a224cfaf6",
        okm: "\
            0bd770a74d1160f7c9f12cd5912a06ebff6adcae899d92191fe4305673ba2ffe\
            8fa3f1a4e5ad79f3f334b3b202b2173c486ea37ce3d397ed034c7f9dfeb15c5e\
            927336d0441f4c4300e2cff0d0900b52d3b4",
    },
    HkdfCase {
        name: "RFC 5869 A.6 (SHA-1, zero-length salt/info)",
        hash: HashSpec::Sha1,
        ikm: IKM_0B_22,
        salt: "",
        info: "",
        length: 42,
        prk: "da8c8a73c7fa77288ec6f5e7c297786aa0d32d01",
        okm: "\
            0ac1af7002b3d761d1e55298da9d0506b9ae52057220a306e07b6b87e8df21d0\
            ea00033de03984d34918",
    },
    HkdfCase {
        name: "RFC 5869 A.7 (SHA-1, salt not provided)",
        hash: HashSpec::Sha1,
        ikm: "0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c",
        salt: "",
        info: "",
        length: 42,
        prk: "2adccada18779e7c2077ad2eb19d3f3e731385dd",
        okm: "\
            2c91117204d745f3500d636a62f64f0ab3bae548aa53d423b0d1f27ebba6f5e5\
            673a081d70cce7acfc48",
    },
];

/// Decoded inputs handed to an HKDF backend.
#[derive(Debug, Clone)]
pub struct HkdfInput {
    /// Hash underlying HMAC
    pub hash: HashSpec,
    /// Salt bytes
    pub salt: Vec<u8>,
    /// Input keying material bytes
    pub ikm: Vec<u8>,
    /// Info bytes
    pub info: Vec<u8>,
    /// Requested output length
    pub length: usize,
}

impl HkdfCase {
    /// Decode the hex fields into backend inputs.
    pub fn input(&self) -> HkdfInput {
        HkdfInput {
            hash: self.hash,
            salt: hex_to_bytes(self.salt),
            ikm: hex_to_bytes(self.ikm),
            info: hex_to_bytes(self.info),
            length: self.length,
        }
    }

    /// Expected PRK bytes.
    pub fn expected_prk(&self) -> Vec<u8> {
        hex_to_bytes(self.prk)
    }

    /// Expected OKM bytes.
    pub fn expected_okm(&self) -> Vec<u8> {
        hex_to_bytes(self.okm)
    }
}

/// Run one case. `derive` returns `(PRK, OKM)`.
pub fn run_case<F>(tc: &HkdfCase, derive: F) -> Result<(), String>
where
    F: Fn(&HkdfInput) -> Result<(Vec<u8>, Vec<u8>), KdfError>,
{
    let (prk, okm) = derive(&tc.input())
        .map_err(|e| format!("{}: expected success but got error: {:?}", tc.name, e))?;

    if prk != tc.expected_prk() {
        return Err(format!(
            "{}: PRK mismatch\n  expected: {}\n  got:      {}",
            tc.name,
            bytes_to_hex(&tc.expected_prk()),
            bytes_to_hex(&prk)
        ));
    }

    if okm != tc.expected_okm() {
        return Err(format!(
            "{}: OKM mismatch\n  expected: {}\n  got:      {}",
            tc.name,
            bytes_to_hex(&tc.expected_okm()),
            bytes_to_hex(&okm)
        ));
    }

    Ok(())
}

/// Run every case, collecting all failures into one report.
pub fn run_all<F>(cases: &[HkdfCase], derive: F) -> Result<(), String>
where
    F: Fn(&HkdfInput) -> Result<(Vec<u8>, Vec<u8>), KdfError>,
{
    let failures: Vec<String> = cases
        .iter()
        .filter_map(|tc| run_case(tc, &derive).err())
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "HKDF vector failures ({}/{}):\n{}",
            failures.len(),
            cases.len(),
            failures.join("\n")
        ))
    }
}
