// Copyright 2026 The sha2-engine Authors.
//
// Permission to use, copy, modify, and/or distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.
//
// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHORS DISCLAIM ALL WARRANTIES
// WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
// MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHORS BE LIABLE FOR ANY
// SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
// WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION
// OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF OR IN
// CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.

use super::{AlreadyFinalized, UnsupportedAlgorithm};

#[cfg(feature = "std")]
extern crate std;

/// An error with absolutely no details.
///
/// Every other error in this crate converts into `Unspecified`, so code that
/// only needs to know *that* something failed can use `?` on any operation
/// and return `Result<T, Unspecified>`:
///
/// ```
/// use sha2_engine::{digest, error};
///
/// fn hash_twice(name: &str, data: &[u8]) -> Result<digest::Digest, error::Unspecified> {
///     let mut ctx = digest::Context::for_name(name)?;
///     ctx.update(data)?;
///     let first = ctx.finish()?;
///     ctx.reset();
///     ctx.update(first.as_ref())?;
///     Ok(ctx.finish()?)
/// }
///
/// assert!(hash_twice("SHA-256", b"abc").is_ok());
/// assert!(hash_twice("SHA-224", b"abc").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unspecified;

// This is required for the implementation of `std::error::Error`.
impl core::fmt::Display for Unspecified {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("sha2_engine::error::Unspecified")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Unspecified {}

impl From<UnsupportedAlgorithm> for Unspecified {
    fn from(_: UnsupportedAlgorithm) -> Self {
        Self
    }
}

impl From<AlreadyFinalized> for Unspecified {
    fn from(_: AlreadyFinalized) -> Self {
        Self
    }
}
