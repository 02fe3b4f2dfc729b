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
    super::{w64::W64, word::Word},
    fallback::{self, Sha2},
    CHAINING_WORDS,
};
use crate::polyfill::slice::AsChunks;

pub(in super::super) const SHA512_BLOCK_LEN: usize = 1024 / 8;

pub(in super::super) type State64 = [W64; CHAINING_WORDS];

pub(in super::super) fn block_data_order_64(
    state: &mut State64,
    data: AsChunks<u8, SHA512_BLOCK_LEN>,
) {
    *state = fallback::block_data_order(*state, data)
}

// SHA-384 and SHA-512
impl Sha2 for W64 {
    // FIPS 180-4 4.1.3
    const BIG_SIGMA_0: (u32, u32, u32) = (28, 34, 39);
    const BIG_SIGMA_1: (u32, u32, u32) = (14, 18, 41);
    const SMALL_SIGMA_0: (u32, u32, usize) = (1, 8, 7);
    const SMALL_SIGMA_1: (u32, u32, usize) = (19, 61, 6);

    // FIPS 180-4 {6.4.2} Step 1
    const ROUNDS: usize = 80;

    type W = [Self; Self::ROUNDS];
    fn zero_w() -> Self::W {
        [Self::ZERO; Self::ROUNDS]
    }

    const K: &'static [Self] = &K_64;
}

// FIPS 180-4 4.2.3
const K_64: [W64; 80] = wrapping_words![
    0x428a2f98d728ae22, 0x7137449123ef65cd, 0xb5c0fbcfec4d3b2f, 0xe9b5dba58189dbbc,
    0x3956c25bf348b538, 0x59f111f1b605d019, 0x923f82a4af194f9b, 0xab1c5ed5da6d8118,
    0xd807aa98a3030242, 0x12835b0145706fbe, 0x243185be4ee4b28c, 0x550c7dc3d5ffb4e2,
    0x72be5d74f27b896f, 0x80deb1fe3b1696b1, 0x9bdc06a725c71235, 0xc19bf174cf692694,
    0xe49b69c19ef14ad2, 0xefbe4786384f25e3, 0x0fc19dc68b8cd5b5, 0x240ca1cc77ac9c65,
    0x2de92c6f592b0275, 0x4a7484aa6ea6e483, 0x5cb0a9dcbd41fbd4, 0x76f988da831153b5,
    0x983e5152ee66dfab, 0xa831c66d2db43210, 0xb00327c898fb213f, 0xbf597fc7beef0ee4,
    0xc6e00bf33da88fc2, 0xd5a79147930aa725, 0x06ca6351e003826f, 0x142929670a0e6e70,
    0x27b70a8546d22ffc, 0x2e1b21385c26c926, 0x4d2c6dfc5ac42aed, 0x53380d139d95b3df,
    0x650a73548baf63de, 0x766a0abb3c77b2a8, 0x81c2c92e47edaee6, 0x92722c851482353b,
    0xa2bfe8a14cf10364, 0xa81a664bbc423001, 0xc24b8b70d0f89791, 0xc76c51a30654be30,
    0xd192e819d6ef5218, 0xd69906245565a910, 0xf40e35855771202a, 0x106aa07032bbd1b8,
    0x19a4c116b8d2d0c8, 0x1e376c085141ab53, 0x2748774cdf8eeb99, 0x34b0bcb5e19b48a8,
    0x391c0cb3c5c95a63, 0x4ed8aa4ae3418acb, 0x5b9cca4f7763e373, 0x682e6ff3d6b2b8a3,
    0x748f82ee5defb2fc, 0x78a5636f43172f60, 0x84c87814a1f0ab72, 0x8cc702081a6439ec,
    0x90befffa23631e28, 0xa4506cebde82bde9, 0xbef9a3f7b2c67915, 0xc67178f2e372532b,
    0xca273eceea26619c, 0xd186b8c721c0c207, 0xeada7dd6cde0eb1e, 0xf57d4f7fee6ed178,
    0x06f067aa72176fba, 0x0a637dc5a2c898a6, 0x113f9804bef90dae, 0x1b710b35131c471b,
    0x28db77f523047d84, 0x32caab7b40c72493, 0x3c9ebe0a15c9bebc, 0x431d67c49c100d4c,
    0x4cc5d4becb3e42b6, 0x597f299cfc657e2a, 0x5fcb6fab3ad6faec, 0x6c44198c4a475817,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polyfill::slice::as_chunks;
    use core::num::Wrapping;

    const SHA512_H0: State64 = wrapping_words![
        0x6a09e667f3bcc908,
        0xbb67ae8584caa73b,
        0x3c6ef372fe94f82b,
        0xa54ff53a5f1d36f1,
        0x510e527fade682d1,
        0x9b05688c2b3e6c1f,
        0x1f83d9abfb41bd6b,
        0x5be0cd19137e2179,
    ];

    // FIPS 180-4 Appendix C.1 ("abc"), expressed as a single padded block.
    #[test]
    fn test_one_block_message_sample() {
        let mut block = [0u8; SHA512_BLOCK_LEN];
        block[..3].copy_from_slice(b"abc");
        block[3] = 0x80;
        block[SHA512_BLOCK_LEN - 1] = 24;

        let (blocks, remainder) = as_chunks::<u8, SHA512_BLOCK_LEN>(&block);
        assert!(remainder.is_empty());

        let mut state = SHA512_H0;
        block_data_order_64(&mut state, blocks);
        assert_eq!(
            state,
            [
                Wrapping(0xddaf35a193617aba),
                Wrapping(0xcc417349ae204131),
                Wrapping(0x12e6fa4e89a97ea2),
                Wrapping(0x0a9eeee64b55d39a),
                Wrapping(0x2192992a274fc1a8),
                Wrapping(0x36ba3c23a3feebbd),
                Wrapping(0x454d4423643ce80e),
                Wrapping(0x2a9ac94fa54ca49f),
            ]
        );
    }

    #[test]
    fn test_k_table_len() {
        assert_eq!(K_64.len(), 80);
        assert_eq!(K_64[79], Wrapping(0x6c44198c4a475817));
    }
}
