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

#![allow(missing_docs)]

#[cfg(feature = "std")]
#[test]
fn error_impl_std_error_error_test() {
    use sha2_engine::{error, kat, test};
    test::compile_time_assert_std_error_error::<error::Unspecified>();
    test::compile_time_assert_std_error_error::<error::UnsupportedAlgorithm>();
    test::compile_time_assert_std_error_error::<error::AlreadyFinalized>();
    test::compile_time_assert_std_error_error::<test::SyntaxError>();
    test::compile_time_assert_std_error_error::<kat::Error>();
}

#[test]
fn error_types_are_send_sync_copy() {
    use sha2_engine::{error, test};
    test::compile_time_assert_copy::<error::Unspecified>();
    test::compile_time_assert_send::<error::AlreadyFinalized>();
    test::compile_time_assert_sync::<error::UnsupportedAlgorithm>();
}

#[test]
fn digest_types_are_clone_send_sync() {
    use sha2_engine::{digest, test};
    test::compile_time_assert_clone::<digest::Context>();
    test::compile_time_assert_copy::<digest::Digest>();
    test::compile_time_assert_send::<digest::Context>();
    test::compile_time_assert_sync::<digest::Algorithm>();
}
