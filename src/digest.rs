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

//! SHA-256, SHA-384, and SHA-512.
//!
//! If all the data is available in a single contiguous slice then the `digest`
//! function should be used. Otherwise, the digest can be calculated in
//! multiple steps using `Context`.
//!
//! All three algorithms share one compression function, generic over the
//! word width. An [`Algorithm`] is pure data: its initial chaining value and
//! the sizes that drive the padding.

use self::dynstate::DynState;
use crate::{bits::BitLength, error, polyfill};

#[macro_use]
mod sha2;

mod dynstate;
mod w32;
mod w64;
mod word;

pub(crate) type Output = [u8; MAX_OUTPUT_LEN];

/// The block-level part of a digest calculation: the chaining value and the
/// number of bytes that have been compressed into it.
#[derive(Clone)]
pub(crate) struct BlockContext {
    state: DynState,

    // SHA-384 and SHA-512 have a 128-bit input bit counter. Counting bytes in
    // a `u128` covers every length any of the algorithms can encode.
    completed_bytes: u128,

    /// The context's algorithm.
    pub algorithm: &'static Algorithm,
}

impl BlockContext {
    pub(crate) fn new(algorithm: &'static Algorithm) -> Self {
        Self {
            state: algorithm.initial_state.clone(),
            completed_bytes: 0,
            algorithm,
        }
    }

    /// Compresses every whole block at the start of `input` and returns the
    /// bytes that are left over.
    pub(crate) fn update<'i>(&mut self, input: &'i [u8]) -> &'i [u8] {
        let (consumed, leftover) = self.state.block_data_order(input);
        self.completed_bytes = self
            .completed_bytes
            .wrapping_add(polyfill::u128_from_usize(consumed));
        leftover
    }

    /// Pads the final `num_pending` bytes of the message, which are at the
    /// start of `pending`, and compresses the final block(s).
    ///
    /// `pending` is used as scratch space for the padding.
    pub(crate) fn finish(&mut self, pending: &mut [u8], num_pending: usize) -> Digest {
        let block_len = self.algorithm.block_len;
        let len_len = self.algorithm.len_len;
        let pending = &mut pending[..block_len];
        debug_assert!(num_pending < block_len);

        let completed_bits = BitLength::from_byte_len(
            self.completed_bytes
                .wrapping_add(polyfill::u128_from_usize(num_pending)),
        );

        let mut padding_pos = num_pending;
        pending[padding_pos] = 0x80;
        padding_pos += 1;

        if padding_pos > block_len - len_len {
            pending[padding_pos..].fill(0);
            let (_, leftover) = self.state.block_data_order(pending);
            debug_assert!(leftover.is_empty());
            // We don't increase `self.completed_bytes` because the padding
            // isn't data, and so it isn't included in the data length.
            padding_pos = 0;
        }

        let (zeros, len) = pending.split_at_mut(block_len - len_len);
        zeros[padding_pos..].fill(0);

        // Output the length, in bits, in big endian order. SHA-256's 64-bit
        // field takes the low half of the 128-bit length.
        let completed_bits = completed_bits.to_be_bytes();
        len.copy_from_slice(&completed_bits[(completed_bits.len() - len_len)..]);

        let (_, leftover) = self.state.block_data_order(pending);
        debug_assert!(leftover.is_empty());

        Digest {
            algorithm: self.algorithm,
            value: self.state.clone().format_output(),
        }
    }
}

/// A context for multi-step (Init-Update-Finish) digest calculations.
///
/// # Examples
///
/// ```
/// use sha2_engine::digest;
///
/// let one_shot = digest::digest(&digest::SHA384, b"hello, world");
///
/// let mut ctx = digest::Context::new(&digest::SHA384);
/// ctx.update(b"hello").unwrap();
/// ctx.update(b", ").unwrap();
/// ctx.update(b"world").unwrap();
/// let multi_part = ctx.finish().unwrap();
///
/// assert_eq!(&one_shot.as_ref(), &multi_part.as_ref());
/// ```
#[derive(Clone)]
pub struct Context {
    block: BlockContext,
    pending: [u8; MAX_BLOCK_LEN],

    // Invariant: `self.num_pending < self.block.algorithm.block_len`.
    num_pending: usize,

    finalized: bool,
}

impl Context {
    /// Constructs a new context.
    pub fn new(algorithm: &'static Algorithm) -> Self {
        Self {
            block: BlockContext::new(algorithm),
            pending: [0u8; MAX_BLOCK_LEN],
            num_pending: 0,
            finalized: false,
        }
    }

    /// Constructs a new context for the algorithm named `name`.
    ///
    /// See [`lookup`] for the accepted names.
    pub fn for_name(name: &str) -> Result<Self, error::UnsupportedAlgorithm> {
        lookup(name).map(Self::new)
    }

    /// Updates the digest with all the data in `data`.
    ///
    /// `update` may be called zero or more times until `finish` is called.
    /// After `finish` it fails with [`error::AlreadyFinalized`] until the
    /// context is [`reset`](Self::reset).
    pub fn update(&mut self, data: &[u8]) -> Result<(), error::AlreadyFinalized> {
        if self.finalized {
            return Err(error::AlreadyFinalized::new());
        }

        let block_len = self.block.algorithm.block_len;
        let mut remaining = data;

        if self.num_pending > 0 || remaining.len() < block_len {
            let space = &mut self.pending[self.num_pending..block_len];
            let (to_copy, rest) = remaining.split_at(space.len().min(remaining.len()));
            space[..to_copy.len()].copy_from_slice(to_copy);
            self.num_pending += to_copy.len();
            remaining = rest;

            if self.num_pending < block_len {
                return Ok(());
            }

            let leftover = self.block.update(&self.pending[..block_len]);
            debug_assert!(leftover.is_empty());
            self.num_pending = 0;
        }

        let leftover = self.block.update(remaining);
        self.pending[..leftover.len()].copy_from_slice(leftover);
        self.num_pending = leftover.len();

        Ok(())
    }

    /// Finalizes the digest calculation and returns the digest value.
    ///
    /// A context can be finished only once; afterwards `update` and `finish`
    /// fail with [`error::AlreadyFinalized`] until the context is
    /// [`reset`](Self::reset).
    pub fn finish(&mut self) -> Result<Digest, error::AlreadyFinalized> {
        if self.finalized {
            return Err(error::AlreadyFinalized::new());
        }
        self.finalized = true;
        Ok(self.block.finish(&mut self.pending, self.num_pending))
    }

    /// Discards all input and starts a new message with the same algorithm.
    pub fn reset(&mut self) {
        *self = Self::new(self.block.algorithm);
    }

    /// The algorithm that this context is using.
    #[inline(always)]
    pub fn algorithm(&self) -> &'static Algorithm {
        self.block.algorithm
    }

    /// The number of bytes passed to `update` since the context was
    /// constructed or last reset.
    pub fn input_len(&self) -> u128 {
        self.block
            .completed_bytes
            .wrapping_add(polyfill::u128_from_usize(self.num_pending))
    }
}

/// Returns the digest of `data` using the given digest algorithm.
///
/// # Examples:
///
/// ```
/// use sha2_engine::digest;
///
/// let expected = "09ca7e4eaa6e8ae9c7d261167129184883644d07dfba7cbfbc4c8a2e08360d5b";
/// let actual = digest::digest(&digest::SHA256, b"hello, world");
///
/// assert_eq!(expected, format!("{:?}", actual).trim_start_matches("SHA256:"));
/// ```
pub fn digest(algorithm: &'static Algorithm, data: &[u8]) -> Digest {
    let mut ctx = BlockContext::new(algorithm);
    let leftover = ctx.update(data);
    let mut pending = [0u8; MAX_BLOCK_LEN];
    pending[..leftover.len()].copy_from_slice(leftover);
    ctx.finish(&mut pending, leftover.len())
}

/// Returns the digest of `data` using the algorithm named `name`.
///
/// See [`lookup`] for the accepted names.
pub fn digest_named(name: &str, data: &[u8]) -> Result<Digest, error::UnsupportedAlgorithm> {
    lookup(name).map(|algorithm| digest(algorithm, data))
}

/// Returns the SHA-256 digest of `data`.
pub fn sha256(data: &[u8]) -> [u8; SHA256_OUTPUT_LEN] {
    fixed_len_digest(&SHA256, data)
}

/// Returns the SHA-384 digest of `data`.
pub fn sha384(data: &[u8]) -> [u8; SHA384_OUTPUT_LEN] {
    fixed_len_digest(&SHA384, data)
}

/// Returns the SHA-512 digest of `data`.
pub fn sha512(data: &[u8]) -> [u8; SHA512_OUTPUT_LEN] {
    fixed_len_digest(&SHA512, data)
}

fn fixed_len_digest<const N: usize>(algorithm: &'static Algorithm, data: &[u8]) -> [u8; N] {
    let digest = digest(algorithm, data);
    let mut output = [0u8; N];
    output.copy_from_slice(digest.as_ref());
    output
}

/// A calculated digest value.
///
/// Use [`Self::as_ref`] to get the value as a `&[u8]`.
#[derive(Clone, Copy)]
pub struct Digest {
    value: Output,
    algorithm: &'static Algorithm,
}

impl Digest {
    /// The algorithm that was used to calculate the digest value.
    #[inline(always)]
    pub fn algorithm(&self) -> &'static Algorithm {
        self.algorithm
    }
}

impl AsRef<[u8]> for Digest {
    #[inline(always)]
    fn as_ref(&self) -> &[u8] {
        &self.value[..self.algorithm.output_len]
    }
}

impl core::fmt::Debug for Digest {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(fmt, "{:?}:", self.algorithm)?;
        for byte in self.as_ref() {
            write!(fmt, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// A digest algorithm.
pub struct Algorithm {
    output_len: usize,
    chaining_len: usize,
    block_len: usize,

    /// The length of the length in the padding.
    len_len: usize,

    initial_state: DynState,

    id: AlgorithmID,
}

/// The identity of a digest algorithm.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AlgorithmID {
    /// SHA-256.
    SHA256,
    /// SHA-384.
    SHA384,
    /// SHA-512.
    SHA512,
}

impl PartialEq for Algorithm {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Algorithm {}

impl core::fmt::Debug for Algorithm {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.id, fmt)
    }
}

impl Algorithm {
    /// The length of a finalized digest, in bytes.
    #[inline]
    pub fn output_len(&self) -> usize {
        self.output_len
    }

    /// The size of the chaining value of the digest function, in bytes.
    ///
    /// For SHA-256 and SHA-512 this is equal to `output_len`. For SHA-384,
    /// which truncates SHA-512's chaining value, it is larger.
    #[inline]
    pub fn chaining_len(&self) -> usize {
        self.chaining_len
    }

    /// The internal block length.
    #[inline]
    pub fn block_len(&self) -> usize {
        self.block_len
    }

    /// The size of the words the compression function operates on, in bytes.
    #[inline]
    pub fn word_len(&self) -> usize {
        use self::word::Word;
        match self.initial_state {
            DynState::As32(_) => w32::W32::LEN,
            DynState::As64(_) => w64::W64::LEN,
        }
    }

    /// The algorithm's identity.
    #[inline]
    pub fn id(&self) -> AlgorithmID {
        self.id
    }
}

/// SHA-256 as specified in [FIPS 180-4].
///
/// [FIPS 180-4]: http://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf
pub static SHA256: Algorithm = Algorithm {
    output_len: SHA256_OUTPUT_LEN,
    chaining_len: SHA256_OUTPUT_LEN,
    block_len: sha2::SHA256_BLOCK_LEN,
    len_len: 64 / 8,
    // FIPS 180-4 5.3.3
    initial_state: DynState::new32(wrapping_words![
        0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab,
        0x5be0cd19,
    ]),
    id: AlgorithmID::SHA256,
};

/// SHA-384 as specified in [FIPS 180-4].
///
/// [FIPS 180-4]: http://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf
pub static SHA384: Algorithm = Algorithm {
    output_len: SHA384_OUTPUT_LEN,
    chaining_len: SHA512_OUTPUT_LEN,
    block_len: sha2::SHA512_BLOCK_LEN,
    len_len: 128 / 8,
    // FIPS 180-4 5.3.4
    initial_state: DynState::new64(wrapping_words![
        0xcbbb9d5dc1059ed8,
        0x629a292a367cd507,
        0x9159015a3070dd17,
        0x152fecd8f70e5939,
        0x67332667ffc00b31,
        0x8eb44a8768581511,
        0xdb0c2e0d64f98fa7,
        0x47b5481dbefa4fa4,
    ]),
    id: AlgorithmID::SHA384,
};

/// SHA-512 as specified in [FIPS 180-4].
///
/// [FIPS 180-4]: http://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf
pub static SHA512: Algorithm = Algorithm {
    output_len: SHA512_OUTPUT_LEN,
    chaining_len: SHA512_OUTPUT_LEN,
    block_len: sha2::SHA512_BLOCK_LEN,
    len_len: 128 / 8,
    // FIPS 180-4 5.3.5
    initial_state: DynState::new64(wrapping_words![
        0x6a09e667f3bcc908,
        0xbb67ae8584caa73b,
        0x3c6ef372fe94f82b,
        0xa54ff53a5f1d36f1,
        0x510e527fade682d1,
        0x9b05688c2b3e6c1f,
        0x1f83d9abfb41bd6b,
        0x5be0cd19137e2179,
    ]),
    id: AlgorithmID::SHA512,
};

static ALL_ALGORITHMS: [&Algorithm; 3] = [&SHA256, &SHA384, &SHA512];

/// Looks up an algorithm by name.
///
/// Accepts `SHA256`, `SHA384` and `SHA512`, in any case, optionally with a
/// hyphen after `SHA` (`SHA-256`). Every other name, including those of the
/// truncated variants such as `SHA-224` and `SHA-512/256`, is rejected.
pub fn lookup(name: &str) -> Result<&'static Algorithm, error::UnsupportedAlgorithm> {
    let bits = name
        .get(..3)
        .filter(|prefix| prefix.eq_ignore_ascii_case("SHA"))
        .and_then(|_| name.get(3..))
        .ok_or_else(error::UnsupportedAlgorithm::new)?;
    let bits = bits.strip_prefix('-').unwrap_or(bits);
    match bits {
        "256" => Ok(&SHA256),
        "384" => Ok(&SHA384),
        "512" => Ok(&SHA512),
        _ => Err(error::UnsupportedAlgorithm::new()),
    }
}

/// Looks up an algorithm by its output length in bytes.
///
/// SHAVS response files identify the algorithm of each section this way
/// (`[L = 32]`).
pub fn lookup_by_output_len(
    output_len: usize,
) -> Result<&'static Algorithm, error::UnsupportedAlgorithm> {
    ALL_ALGORITHMS
        .iter()
        .copied()
        .find(|algorithm| algorithm.output_len == output_len)
        .ok_or_else(error::UnsupportedAlgorithm::new)
}

/// The maximum block length ([`Algorithm::block_len()`]) of all the algorithms
/// in this module.
pub const MAX_BLOCK_LEN: usize = 1024 / 8;

/// The maximum output length ([`Algorithm::output_len()`]) of all the
/// algorithms in this module.
pub const MAX_OUTPUT_LEN: usize = 512 / 8;

/// The maximum chaining length ([`Algorithm::chaining_len()`]) of all the
/// algorithms in this module.
pub const MAX_CHAINING_LEN: usize = MAX_OUTPUT_LEN;

/// The length of the output of SHA-256, in bytes.
pub const SHA256_OUTPUT_LEN: usize = 256 / 8;

/// The length of the output of SHA-384, in bytes.
pub const SHA384_OUTPUT_LEN: usize = 384 / 8;

/// The length of the output of SHA-512, in bytes.
pub const SHA512_OUTPUT_LEN: usize = 512 / 8;

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;

    #[test]
    fn test_profile_table() {
        for (alg, output_len, block_len, word_len) in [
            (&SHA256, 32, 64, 4),
            (&SHA384, 48, 128, 8),
            (&SHA512, 64, 128, 8),
        ] {
            assert_eq!(alg.output_len(), output_len);
            assert_eq!(alg.block_len(), block_len);
            assert_eq!(alg.word_len(), word_len);
            assert_eq!(alg.chaining_len(), word_len * 8);
            assert!(alg.output_len() <= MAX_OUTPUT_LEN);
            assert!(alg.block_len() <= MAX_BLOCK_LEN);
            assert_eq!(alg.len_len, 2 * word_len);
        }
    }

    #[test]
    fn test_lookup() {
        for name in ["SHA256", "sha256", "SHA-256", "Sha-256"] {
            assert_eq!(lookup(name), Ok(&SHA256));
        }
        assert_eq!(lookup("sha-384").map(Algorithm::id), Ok(AlgorithmID::SHA384));
        assert_eq!(lookup("SHA512").map(Algorithm::id), Ok(AlgorithmID::SHA512));

        for name in [
            "", "SHA", "SHA-", "SHA1", "SHA224", "SHA-224", "SHA-512/256", "SHA--256",
            "SHA 256", "MD5", "SHA2560", "éSHA256",
        ] {
            assert_eq!(lookup(name), Err(error::UnsupportedAlgorithm::new()), "{}", name);
        }
    }

    #[test]
    fn test_lookup_by_output_len() {
        assert_eq!(lookup_by_output_len(32), Ok(&SHA256));
        assert_eq!(lookup_by_output_len(48), Ok(&SHA384));
        assert_eq!(lookup_by_output_len(64), Ok(&SHA512));
        for len in [0, 20, 28, 65] {
            assert!(lookup_by_output_len(len).is_err());
        }
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(
            format!("{:?}", digest(&SHA256, b"")),
            "SHA256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            format!("{:?}", digest(&SHA384, b"")),
            "SHA384:38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da\
             274edebfe76f65fbd51ad2f14898b95b"
        );
        assert_eq!(
            format!("{:?}", digest(&SHA512, b"")),
            "SHA512:cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
             47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
        );
    }

    // The padding needs a second block when fewer than `len_len + 1` bytes
    // remain in the last block.
    #[test]
    fn test_padding_boundaries() {
        let a = [b'a'; 128];
        assert_eq!(
            format!("{:?}", digest(&SHA256, &a[..55])),
            "SHA256:9f4390f8d30c2dd92ec9f095b65e2b9ae9b0a925a5258e241c9f1e910f734318"
        );
        assert_eq!(
            format!("{:?}", digest(&SHA256, &a[..56])),
            "SHA256:b35439a4ac6f0948b6d6f9e3c6af0f5f590ce20f1bde7090ef7970686ec6738a"
        );
        assert_eq!(
            format!("{:?}", digest(&SHA256, &a[..64])),
            "SHA256:ffe054fe7ae0cb6dc65c3af9b61d5209f439851db43d0ba5997337df154668eb"
        );
        assert_eq!(
            format!("{:?}", digest(&SHA512, &a[..111])),
            "SHA512:fa9121c7b32b9e01733d034cfc78cbf67f926c7ed83e82200ef8681819692176\
             0b4beff48404df811b953828274461673c68d04e297b0eb7b2b4d60fc6b566a2"
        );
        assert_eq!(
            format!("{:?}", digest(&SHA512, &a[..112])),
            "SHA512:c01d080efd492776a1c43bd23dd99d0a2e626d481e16782e75d54c2503b5dc32\
             bd05f0f1ba33e568b88fd2d970929b719ecbb152f58f130a407c8830604b70ca"
        );
        assert_eq!(
            format!("{:?}", digest(&SHA512, &a[..128])),
            "SHA512:b73d1929aa615934e61a871596b3f3b33359f42b8175602e89f7e06e5f658a24\
             3667807ed300314b95cacdd579f3e33abdfbe351909519a846d465c59582f321"
        );
    }

    #[test]
    fn test_finalized_context_rejects_use() {
        let mut ctx = Context::new(&SHA256);
        ctx.update(b"abc").unwrap();
        let first = ctx.finish().unwrap();
        assert_eq!(ctx.finish().err(), Some(error::AlreadyFinalized::new()));
        assert_eq!(ctx.update(b"d"), Err(error::AlreadyFinalized::new()));
        assert_eq!(ctx.update(b""), Err(error::AlreadyFinalized::new()));

        ctx.reset();
        ctx.update(b"abc").unwrap();
        assert_eq!(ctx.finish().unwrap().as_ref(), first.as_ref());
    }

    #[test]
    fn test_reset_discards_input() {
        let mut ctx = Context::new(&SHA384);
        ctx.update(&[0x5a; 300]).unwrap();
        ctx.reset();
        assert_eq!(ctx.input_len(), 0);
        ctx.update(b"abc").unwrap();
        assert_eq!(
            format!("{:?}", ctx.finish().unwrap()),
            "SHA384:cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
             8086072ba1e7cc2358baeca134c825a7"
        );
    }

    #[test]
    fn test_input_len() {
        let mut ctx = Context::new(&SHA512);
        assert_eq!(ctx.input_len(), 0);
        ctx.update(&[0; 127]).unwrap();
        assert_eq!(ctx.input_len(), 127);
        ctx.update(&[0; 2]).unwrap();
        assert_eq!(ctx.input_len(), 129);
        ctx.update(&[0; 256]).unwrap();
        assert_eq!(ctx.input_len(), 385);
        let _ = ctx.finish().unwrap();
        assert_eq!(ctx.input_len(), 385);
    }

    #[test]
    fn test_clone_forks_the_hash() {
        let mut ctx = Context::new(&SHA256);
        ctx.update(b"hello").unwrap();
        let mut fork = ctx.clone();
        ctx.update(b", world").unwrap();
        fork.update(b", there").unwrap();
        assert_eq!(ctx.finish().unwrap().as_ref(), sha256(b"hello, world"));
        assert_eq!(fork.finish().unwrap().as_ref(), sha256(b"hello, there"));
    }

    #[test]
    fn test_named_and_fixed_len() {
        let named = digest_named("SHA-512", b"abc").unwrap();
        assert_eq!(named.algorithm(), &SHA512);
        assert_eq!(named.as_ref(), &sha512(b"abc")[..]);
        assert_eq!(
            digest_named("sha384", b"abc").unwrap().as_ref(),
            &sha384(b"abc")[..]
        );
        assert!(digest_named("SHA-224", b"abc").is_err());
        assert!(Context::for_name("SHA-1").is_err());
        assert_eq!(Context::for_name("sha256").unwrap().algorithm(), &SHA256);
    }
}
