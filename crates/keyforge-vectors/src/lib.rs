// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Published test vectors for HKDF and PBKDF2, plus runners that check a
//! backend against them and report every mismatch at once.
//!
//! Sources:
//! - RFC 5869 Appendix A (HKDF with SHA-256 and SHA-1)
//! - RFC 6070 (PBKDF2-HMAC-SHA1)
//! - RFC 7914 Section 11 (PBKDF2-HMAC-SHA256)

pub mod hkdf;
pub mod pbkdf2;
