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

use super::{
    sha2::{
        self, State32, State64, CHAINING_WORDS, SHA256_BLOCK_LEN, SHA512_BLOCK_LEN,
    },
    Output, MAX_OUTPUT_LEN,
};
use crate::polyfill::slice;
use core::{mem::size_of, num::Wrapping};

// Invariant: When constructed with `new32` (resp. `new64`), `As32` (resp.
// `As64`) is the active variant.
// Invariant: The active variant never changes after initialization.
#[derive(Clone)]
pub(super) enum DynState {
    As64(State64),
    As32(State32),
}

impl DynState {
    pub const fn new32(initial_state: State32) -> Self {
        Self::As32(initial_state)
    }

    pub const fn new64(initial_state: State64) -> Self {
        Self::As64(initial_state)
    }

    /// Compresses the longest prefix of `data` that is a whole number of
    /// blocks, returning the number of bytes consumed and the leftover bytes.
    pub fn block_data_order<'d>(&mut self, data: &'d [u8]) -> (usize, &'d [u8]) {
        match self {
            Self::As32(state) => {
                let (full_blocks, leftover) = slice::as_chunks::<u8, SHA256_BLOCK_LEN>(data);
                sha2::block_data_order_32(state, full_blocks);
                (full_blocks.as_flattened().len(), leftover)
            }
            Self::As64(state) => {
                let (full_blocks, leftover) = slice::as_chunks::<u8, SHA512_BLOCK_LEN>(data);
                sha2::block_data_order_64(state, full_blocks);
                (full_blocks.as_flattened().len(), leftover)
            }
        }
    }

    /// Serializes the chaining value as big-endian bytes. Bytes beyond the
    /// chaining length are zero.
    pub fn format_output(self) -> Output {
        match self {
            Self::As64(state) => {
                format_output::<_, { size_of::<u64>() }>(state, |Wrapping(w)| w.to_be_bytes())
            }
            Self::As32(state) => {
                format_output::<_, { size_of::<u32>() }>(state, |Wrapping(w)| w.to_be_bytes())
            }
        }
    }
}

fn format_output<T, const N: usize>(
    state: [T; CHAINING_WORDS],
    to_be_bytes: impl Fn(T) -> [u8; N],
) -> Output {
    let mut output = [0u8; MAX_OUTPUT_LEN];
    output
        .chunks_exact_mut(N)
        .zip(state)
        .for_each(|(out, word)| out.copy_from_slice(&to_be_bytes(word)));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_output_32_is_big_endian_and_zero_padded() {
        let state = DynState::new32([Wrapping(0x01020304); CHAINING_WORDS]);
        let output = state.format_output();
        assert_eq!(&output[..8], &[1, 2, 3, 4, 1, 2, 3, 4]);
        assert!(output[32..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_format_output_64() {
        let mut initial = [Wrapping(0u64); CHAINING_WORDS];
        initial[7] = Wrapping(0x0102030405060708);
        let output = DynState::new64(initial).format_output();
        assert_eq!(&output[56..], &[1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_block_data_order_leaves_partial_block() {
        let mut state = DynState::new32([Wrapping(0); CHAINING_WORDS]);
        let data = [0u8; SHA256_BLOCK_LEN * 2 + 5];
        let (consumed, leftover) = state.block_data_order(&data);
        assert_eq!(consumed, SHA256_BLOCK_LEN * 2);
        assert_eq!(leftover.len(), 5);

        let mut state = DynState::new64([Wrapping(0); CHAINING_WORDS]);
        let (consumed, leftover) = state.block_data_order(&data);
        assert_eq!(consumed, SHA512_BLOCK_LEN);
        assert_eq!(leftover.len(), 5);
    }
}
