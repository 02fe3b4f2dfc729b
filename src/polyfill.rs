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

//! Polyfills for functionality that is missing from, or not yet stable in,
//! the minimum supported version of Rust's standard library.

/// Lossless `usize` to `u128` conversion, usable in `const` contexts.
#[inline(always)]
pub const fn u128_from_usize(x: usize) -> u128 {
    #[allow(clippy::cast_possible_truncation)]
    const _LOSSLESS: () = assert!(usize::MAX == ((usize::MAX) as u128) as usize);
    x as u128
}

pub(crate) mod slice;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u128_from_usize() {
        assert_eq!(u128_from_usize(0), 0);
        assert_eq!(u128_from_usize(usize::MAX) + 1, 1u128 << usize::BITS);
    }
}
