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

//! The SHA-2 compression function.
//!
//! There is one implementation of the round function, in `fallback`, generic
//! over the word type. `sha2_32` instantiates it for SHA-256 and `sha2_64`
//! for SHA-384 and SHA-512.

pub(super) use self::{
    sha2_32::{block_data_order_32, State32, SHA256_BLOCK_LEN},
    sha2_64::{block_data_order_64, State64, SHA512_BLOCK_LEN},
};

/// The number of words in the chaining value of every SHA-2 algorithm.
pub(super) const CHAINING_WORDS: usize = 8;

#[macro_use]
mod k;

mod fallback;
mod sha2_32;
mod sha2_64;
