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

use super::{super::word::Word, CHAINING_WORDS};
use crate::polyfill::slice::AsChunks;

/// Compresses each block of `M` into the chaining value `H`.
#[inline]
pub(super) fn block_data_order<S: Sha2, const BLOCK_LEN: usize>(
    mut H: [S; CHAINING_WORDS],
    M: AsChunks<u8, BLOCK_LEN>,
) -> [S; CHAINING_WORDS] {
    for M in M {
        // FIPS 180-4 {6.2.2, 6.4.2} Step 1
        let mut W = S::zero_w();
        let W = W.as_mut();
        W.iter_mut()
            .zip(M.chunks_exact(S::LEN))
            .for_each(|(Wt, Mt)| *Wt = S::from_be_slice(Mt));
        for t in 16..S::ROUNDS {
            W[t] = sigma_1(W[t - 2]) + W[t - 7] + sigma_0(W[t - 15]) + W[t - 16]
        }

        // FIPS 180-4 {6.2.2, 6.4.2} Step 2
        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = H;

        // FIPS 180-4 {6.2.2, 6.4.2} Step 3
        for (Kt, Wt) in S::K.iter().zip(W.iter()) {
            let T1 = h + SIGMA_1(e) + ch(e, f, g) + *Kt + *Wt;
            let T2 = SIGMA_0(a) + maj(a, b, c);
            h = g;
            g = f;
            f = e;
            e = d + T1;
            d = c;
            c = b;
            b = a;
            a = T1 + T2;
        }

        // FIPS 180-4 {6.2.2, 6.4.2} Step 4
        H[0] += a;
        H[1] += b;
        H[2] += c;
        H[3] += d;
        H[4] += e;
        H[5] += f;
        H[6] += g;
        H[7] += h;
    }

    H
}

// FIPS 180-4 {4.1.2, 4.1.3}
#[inline(always)]
fn ch<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) | (!x & z)
}

// FIPS 180-4 {4.1.2, 4.1.3}
#[inline(always)]
fn maj<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) | (x & z) | (y & z)
}

// FIPS 180-4 {4.1.2, 4.1.3}
#[inline(always)]
fn SIGMA_0<S: Sha2>(x: S) -> S {
    x.rotr(S::BIG_SIGMA_0.0) ^ x.rotr(S::BIG_SIGMA_0.1) ^ x.rotr(S::BIG_SIGMA_0.2)
}

// FIPS 180-4 {4.1.2, 4.1.3}
#[inline(always)]
fn SIGMA_1<S: Sha2>(x: S) -> S {
    x.rotr(S::BIG_SIGMA_1.0) ^ x.rotr(S::BIG_SIGMA_1.1) ^ x.rotr(S::BIG_SIGMA_1.2)
}

// FIPS 180-4 {4.1.2, 4.1.3}
#[inline(always)]
fn sigma_0<S: Sha2>(x: S) -> S {
    x.rotr(S::SMALL_SIGMA_0.0) ^ x.rotr(S::SMALL_SIGMA_0.1) ^ (x >> S::SMALL_SIGMA_0.2)
}

// FIPS 180-4 {4.1.2, 4.1.3}
#[inline(always)]
fn sigma_1<S: Sha2>(x: S) -> S {
    x.rotr(S::SMALL_SIGMA_1.0) ^ x.rotr(S::SMALL_SIGMA_1.1) ^ (x >> S::SMALL_SIGMA_1.2)
}

/// A SHA-2 input word, with the constants that distinguish the 32-bit and
/// 64-bit variants of the compression function.
pub(super) trait Sha2: Word {
    const BIG_SIGMA_0: (u32, u32, u32);
    const BIG_SIGMA_1: (u32, u32, u32);
    const SMALL_SIGMA_0: (u32, u32, usize);
    const SMALL_SIGMA_1: (u32, u32, usize);

    const ROUNDS: usize;

    /// The message schedule; `ROUNDS` words.
    type W: AsRef<[Self]> + AsMut<[Self]>;
    fn zero_w() -> Self::W;

    /// The round constants; `ROUNDS` words.
    const K: &'static [Self];
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::num::Wrapping;

    #[test]
    fn test_ch_selects_bits() {
        let x = Wrapping(0xff00ff00u32);
        let y = Wrapping(0x12345678u32);
        let z = Wrapping(0x9abcdef0u32);
        assert_eq!(ch(x, y, z), Wrapping(0x12bc56f0));
    }

    #[test]
    fn test_maj_majority() {
        let x = Wrapping(0b1100u64);
        let y = Wrapping(0b1010u64);
        let z = Wrapping(0b0110u64);
        assert_eq!(maj(x, y, z), Wrapping(0b1110));
    }
}
