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

/// Splits `slice` into the longest prefix that is a whole number of `N`-element
/// chunks, and the remainder.
// TODO(MSRV-1.88): Use `slice::as_chunks`.
#[inline(always)]
pub fn as_chunks<T, const N: usize>(slice: &[T]) -> (AsChunks<'_, T, N>, &[T]) {
    assert!(N != 0, "chunk size must be non-zero");
    let len = slice.len() / N;
    let (multiple_of_n, remainder) = slice.split_at(len * N);
    (AsChunks(multiple_of_n), remainder)
}

/// A slice whose length is a multiple of `N`, viewed as `&[T; N]` chunks.
#[derive(Clone, Copy)]
pub struct AsChunks<'a, T, const N: usize>(&'a [T]);

impl<'a, T, const N: usize> AsChunks<'a, T, N> {
    #[inline(always)]
    pub fn as_flattened(&self) -> &'a [T] {
        self.0
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len() / N
    }
}

impl<'a, T, const N: usize> IntoIterator for AsChunks<'a, T, N> {
    type IntoIter = AsChunksIter<'a, T, N>;
    type Item = &'a [T; N];

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        AsChunksIter(self.0.chunks_exact(N))
    }
}

pub struct AsChunksIter<'a, T, const N: usize>(core::slice::ChunksExact<'a, T>);

impl<'a, T, const N: usize> Iterator for AsChunksIter<'a, T, N> {
    type Item = &'a [T; N];

    // `ChunksExact` only yields chunks of exactly `N` elements, so the
    // conversion never fails.
    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().and_then(|chunk| chunk.try_into().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_chunks_remainder() {
        let data = [0u8, 1, 2, 3, 4, 5, 6];
        let (chunks, remainder) = as_chunks::<u8, 3>(&data);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks.as_flattened(), &data[..6]);
        assert_eq!(remainder, &[6]);

        let collected: [&[u8; 3]; 2] = {
            let mut iter = chunks.into_iter();
            [iter.next().unwrap(), iter.next().unwrap()]
        };
        assert_eq!(collected, [&[0, 1, 2], &[3, 4, 5]]);
    }

    #[test]
    fn test_as_chunks_short_input() {
        let data = [9u8; 2];
        let (chunks, remainder) = as_chunks::<u8, 4>(&data);
        assert!(chunks.is_empty());
        assert_eq!(remainder, &data[..]);
    }
}
