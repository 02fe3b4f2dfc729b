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

//! SHA-256, SHA-384, and SHA-512 in safe, dependency-light Rust.
//!
//! The [`digest`] module contains the hash engine: a single compression
//! function generic over the word width, three static algorithm profiles,
//! a streaming [`digest::Context`], and the one-shot [`digest::digest`].
//!
//! # Feature Flags
//!
//! <table>
//! <tr><th>Feature
//!     <th>Description
//! <tr><td><code>alloc (default)</code>
//!     <td>Enable the <code>test</code> module, the reader for the
//!         attribute-block test vector files used by this crate's tests.
//! <tr><td><code>std (default)</code>
//!     <td>Enable the <code>kat</code> module, which verifies the engine
//!         against SHAVS response (<code>.rsp</code>) files and counts
//!         passes and failures, and implement
//!         <code>std::error::Error</code> for the error types. Implies
//!         <code>alloc</code>.
//! <tr><td><code>slow_tests</code>
//!     <td>Run the exhaustive update-splitting tests in debug builds too,
//!         and the large-input streaming tests.
//! </table>

#![allow(clippy::new_without_default, non_snake_case)]
#![forbid(unsafe_code)]
#![warn(missing_docs, unused_qualifications, unused_results)]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod bits;
mod polyfill;

pub mod digest;
pub mod error;

#[cfg(feature = "std")]
pub mod kat;
