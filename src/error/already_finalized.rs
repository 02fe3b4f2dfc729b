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

#[cfg(feature = "std")]
extern crate std;

/// A [`crate::digest::Context`] was updated or finished after it had already
/// been finished.
///
/// Finishing a context applies the padding to its state, so the state no
/// longer describes a message prefix. Call [`crate::digest::Context::reset`]
/// to start a new message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlreadyFinalized(());

impl AlreadyFinalized {
    #[cold]
    #[inline(never)]
    pub(crate) fn new() -> Self {
        Self(())
    }
}

impl core::fmt::Display for AlreadyFinalized {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("sha2_engine::error::AlreadyFinalized")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AlreadyFinalized {}
