// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Derived key material containers

use alloc::vec::Vec;
use core::fmt;

use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

macro_rules! secret_bytes {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Zeroize, ZeroizeOnDrop)]
        pub struct $name(Vec<u8>);

        impl $name {
            /// Wrap already-derived bytes.
            pub fn from_vec(bytes: Vec<u8>) -> Self {
                Self(bytes)
            }

            /// Borrow the raw bytes.
            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }

            /// Length in bytes.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// `true` when no bytes were derived.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Move the bytes out. They stay zeroize-on-drop.
            pub fn into_zeroizing(mut self) -> Zeroizing<Vec<u8>> {
                Zeroizing::new(core::mem::take(&mut self.0))
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl ConstantTimeEq for $name {
            fn ct_eq(&self, other: &Self) -> Choice {
                self.0.as_slice().ct_eq(other.0.as_slice())
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.ct_eq(other).into()
            }
        }

        impl Eq for $name {}

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}([REDACTED; {} bytes])", stringify!($name), self.0.len())
            }
        }
    };
}

secret_bytes!(
    /// HKDF pseudorandom key: output of Extract, `digest_len` bytes.
    Prk
);

secret_bytes!(
    /// HKDF output keying material: output of Expand, caller-chosen length.
    Okm
);

secret_bytes!(
    /// PBKDF2 derived key, caller-chosen length.
    DerivedKey
);
