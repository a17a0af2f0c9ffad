// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for keyforge crates.
//!
//! Hex helpers for writing test vectors inline. These panic on malformed
//! input and are not meant for production parsing.
//!
//! ## License
//!
//! GPL-3.0-only

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

fn nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("invalid hex character: {:?}", c as char),
    }
}

/// Decode a hex string. Whitespace is ignored so long vectors can be wrapped.
///
/// # Panics
///
/// Panics on a non-hex character or an odd number of digits.
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    let digits: Vec<u8> = hex
        .bytes()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    assert!(
        digits.len() % 2 == 0,
        "hex string has an odd number of digits ({})",
        digits.len()
    );

    digits
        .chunks_exact(2)
        .map(|pair| (nibble(pair[0]) << 4) | nibble(pair[1]))
        .collect()
}

/// Encode bytes as lowercase hex.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);

    for byte in bytes {
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
    }

    out
}
