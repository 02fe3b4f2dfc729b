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

//! Bit lengths.

/// A length measured in bits.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd)]
pub(crate) struct BitLength<T = usize>(T);

impl BitLength<usize> {
    #[inline]
    pub const fn from_bits(bits: usize) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn as_usize_bytes_rounded_up(self) -> usize {
        // Equivalent to (self.0 + 7) / 8, except with no potential for
        // overflow and without branches.

        // Branchless round_up = if self.0 & 0b111 != 0 { 1 } else { 0 };
        let round_up = ((self.0 >> 2) | (self.0 >> 1) | self.0) & 1;

        (self.0 / 8) + round_up
    }

    /// The number of bits used in the final, partial byte, or zero if the
    /// length is a whole number of bytes.
    #[inline]
    pub const fn bits_in_last_partial_byte(self) -> usize {
        self.0 % 8
    }
}

impl BitLength<u128> {
    /// The bit length of a message of `bytes` bytes.
    ///
    /// Message lengths of 2**125 bytes or more wrap; they do not fit in any
    /// SHA-2 length field.
    #[inline]
    pub const fn from_byte_len(bytes: u128) -> Self {
        Self(bytes.wrapping_shl(3))
    }

    #[inline]
    pub const fn to_be_bytes(self) -> [u8; 16] {
        self.0.to_be_bytes()
    }
}
