// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RFC 6070 and RFC 7914 PBKDF2 test vectors

use keyforge_core::{HashSpec, KdfError};
use keyforge_test_utils::{bytes_to_hex, hex_to_bytes};

/// A single PBKDF2 test case.
#[derive(Debug, Clone, Copy)]
pub struct Pbkdf2Case {
    /// Test case identifier
    pub name: &'static str,
    /// Hash underlying HMAC
    pub hash: HashSpec,
    /// Password P
    pub password: &'static [u8],
    /// Salt S
    pub salt: &'static [u8],
    /// Iteration count c
    pub iterations: usize,
    /// Expected derived key DK (hex); its length is dkLen
    pub dk: &'static str,
}

/// RFC 6070 Section 2, except the 16777216-iteration case (see [`RFC6070_SLOW`]).
pub const RFC6070: &[Pbkdf2Case] = &[
    Pbkdf2Case {
        name: "RFC 6070 #1 (c = 1)",
        hash: HashSpec::Sha1,
        password: b"password",
        salt: b"salt",
        iterations: 1,
        dk: "0c60c80f961f0e71f3a9b524af6012062fe037a6",
    },
    Pbkdf2Case {
        name: "RFC 6070 #2 (c = 2)",
        hash: HashSpec::Sha1,
        password: b"password",
        salt: b"salt",
        iterations: 2,
        dk: "ea6c014dc72d6f8ccd1ed92ace1d41f0d8de8957",
    },
    Pbkdf2Case {
        name: "RFC 6070 #3 (c = 4096)",
        hash: HashSpec::Sha1,
        password: b"password",
        salt: b"salt",
        iterations: 4096,
        dk: "4b007901b765489abead49d926f721d065a429c1",
    },
    Pbkdf2Case {
        name: "RFC 6070 #5 (dkLen = 25, multi-block)",
        hash: HashSpec::Sha1,
        password: b"passwordPASSWORDpassword",
        salt: b"saltSALTsaltSALTsaltSALTsaltSALTsalt",
        iterations: 4096,
        dk: "3d2eec4fe41c849b80c8d83662c0e44a8b291a964cf2f07038",
    },
    Pbkdf2Case {
        name: "RFC 6070 #6 (embedded NUL)",
        hash: HashSpec::Sha1,
        password: b"pass\0word",
        salt: b"sa\0lt",
        iterations: 4096,
        dk: "56fa6aa75548099dcc37d7f03425e0c3",
    },
];

/// RFC 6070 #4: 16777216 iterations. Takes minutes in debug builds.
pub const RFC6070_SLOW: Pbkdf2Case = Pbkdf2Case {
    name: "RFC 6070 #4 (c = 16777216)",
    hash: HashSpec::Sha1,
    password: b"password",
    salt: b"salt",
    iterations: 16_777_216,
    dk: "eefe3d61cd4da4e4e9945b3d6ba2158c2634e984",
};

/// RFC 7914 Section 11 (PBKDF2-HMAC-SHA256)
pub const RFC7914: &[Pbkdf2Case] = &[
    Pbkdf2Case {
        name: "RFC 7914 #1 (c = 1)",
        hash: HashSpec::Sha256,
        password: b"passwd",
        salt: b"salt",
        iterations: 1,
        dk: "\
            55ac046e56e3089fec1691c22544b605f94185216dde0465e68b9d57c20dacbc\
            49ca9cccf179b645991664b39d77ef317c71b845b1e30bd509112041d3a19783",
    },
    Pbkdf2Case {
        name: "RFC 7914 #2 (c = 80000)",
        hash: HashSpec::Sha256,
        password: b"Password",
        salt: b"NaCl",
        iterations: 80_000,
        dk: "\
            4ddcd8f60b98be21830cee5ef22701f9641a4418d04c0414aeff08876b34ab56\
            a1d425a1225833549adb841b51c9b3176a272bdebba1d078478f62b397f33c8d",
    },
];

impl Pbkdf2Case {
    /// Expected derived key bytes.
    pub fn expected_dk(&self) -> Vec<u8> {
        hex_to_bytes(self.dk)
    }
}

/// Run one case. `derive(hash, password, salt, iterations, dk_len)` returns the key.
pub fn run_case<F>(tc: &Pbkdf2Case, derive: F) -> Result<(), String>
where
    F: Fn(HashSpec, &[u8], &[u8], usize, usize) -> Result<Vec<u8>, KdfError>,
{
    let expected = tc.expected_dk();
    let dk = derive(tc.hash, tc.password, tc.salt, tc.iterations, expected.len())
        .map_err(|e| format!("{}: expected success but got error: {:?}", tc.name, e))?;

    if dk != expected {
        return Err(format!(
            "{}: derived key mismatch\n  expected: {}\n  got:      {}",
            tc.name,
            tc.dk,
            bytes_to_hex(&dk)
        ));
    }

    Ok(())
}

/// Run every case, collecting all failures into one report.
pub fn run_all<F>(cases: &[Pbkdf2Case], derive: F) -> Result<(), String>
where
    F: Fn(HashSpec, &[u8], &[u8], usize, usize) -> Result<Vec<u8>, KdfError>,
{
    let failures: Vec<String> = cases
        .iter()
        .filter_map(|tc| run_case(tc, &derive).err())
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "PBKDF2 vector failures ({}/{}):\n{}",
            failures.len(),
            cases.len(),
            failures.join("\n")
        ))
    }
}
