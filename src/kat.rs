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

//! Known-answer verification against SHAVS response (`.rsp`) files.
//!
//! A response file is a sequence of sections, each headed `[L = n]` where `n`
//! is the digest length in bytes. Message vectors give a message length in
//! bits, the message, and its digest:
//!
//! ```text
//! [L = 32]
//!
//! Len = 8
//! Msg = d3
//! MD = 28969cdfa74a12c82f3bad960b0b000aca2ac329deea5c2328ebc6f2ba9802c1
//! ```
//!
//! Monte Carlo files instead give a `Seed` followed by numbered checkpoints
//! (`COUNT = 0`, `MD = ...`), each reached by 1000 chained hashes.
//!
//! When `Len` isn't a multiple of 8, the message is the first `ceil(Len / 8)`
//! bytes of `Msg` with the bits past `Len` cleared, hashed as whole bytes. The
//! digests in NIST's bit-oriented `BitMsg` files cover the exact bit string,
//! so those files don't verify under this policy.
//!
//! Unlike [`crate::test::run`], verification doesn't stop at the first
//! mismatch. Every vector is run and the mismatches are collected into a
//! [`Report`]. Only a file that can't be read or parsed is an [`Error`].

use crate::{
    bits::BitLength,
    digest,
    error,
    test::{self, SyntaxError, SyntaxErrorKind},
};
use core::fmt;
use std::{
    borrow::ToOwned,
    path::{Path, PathBuf},
    string::{String, ToString},
    vec::Vec,
};

/// The number of chained hashes between two Monte Carlo checkpoints.
pub const MONTE_CARLO_ROUNDS: usize = 1000;

// Message vectors are streamed in chunks of this many bytes. It is odd, and
// shares no factor with either block length, so chunk boundaries fall at
// every offset within a block.
const STREAMING_CHUNK_LEN: usize = 61;

/// A vector file couldn't be verified.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The file couldn't be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// The file's path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file isn't a well-formed response file.
    #[error("{file}: {source}")]
    Syntax {
        /// The file's name.
        file: String,
        /// What's wrong, and where.
        #[source]
        source: SyntaxError,
    },

    /// A byte-valued attribute isn't valid hex.
    #[error("{file}: line {line}: attribute `{key}` is not valid hex: {source}")]
    Hex {
        /// The file's name.
        file: String,
        /// The line of the test case.
        line: usize,
        /// The attribute's name.
        key: String,
        /// Why the value isn't valid hex.
        #[source]
        source: hex::FromHexError,
    },

    /// The harness misused the digest engine.
    #[error("digest engine misuse: {0}")]
    Engine(#[from] error::AlreadyFinalized),
}

impl Error {
    fn syntax(file: &str, source: SyntaxError) -> Self {
        if let SyntaxErrorKind::InvalidHex {
            key,
            source: hex_error,
        } = source.kind()
        {
            return Self::Hex {
                file: file.to_owned(),
                line: source.line(),
                key: key.clone(),
                source: hex_error.clone(),
            };
        }
        Self::Syntax {
            file: file.to_owned(),
            source,
        }
    }
}

/// How a digest was computed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    /// Fed through a [`digest::Context`] in several `update` calls.
    Streaming,

    /// Computed by [`digest::digest`].
    OneShot,

    /// The Monte Carlo checkpoint numbered `count`.
    MonteCarlo {
        /// The checkpoint's `COUNT`.
        count: usize,
    },
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Streaming => f.write_str("streaming"),
            Self::OneShot => f.write_str("one-shot"),
            Self::MonteCarlo { count } => write!(f, "Monte Carlo, COUNT = {}", count),
        }
    }
}

/// A vector whose computed digest didn't match the expected one.
#[derive(Clone, Debug)]
pub struct Failure {
    /// The line of the test case in the vector file.
    pub line: usize,

    /// The algorithm of the vector's section.
    pub algorithm: &'static digest::Algorithm,

    /// How the digest was computed.
    pub mode: Mode,

    /// The declared length of the input, in bits.
    pub bit_len: usize,

    /// The input after truncation to `bit_len` bits. For Monte Carlo
    /// checkpoints, the seed.
    pub input: Vec<u8>,

    /// The digest in the vector file.
    pub expected: Vec<u8>,

    /// The digest that was computed.
    pub actual: Vec<u8>,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "FAIL {:?} ({}) at line {}: Len = {}",
            self.algorithm, self.mode, self.line, self.bit_len
        )?;
        writeln!(f, "  Input:    {}", hex::encode(&self.input))?;
        writeln!(f, "  Expected: {}", hex::encode(&self.expected))?;
        write!(f, "  Actual:   {}", hex::encode(&self.actual))
    }
}

/// The outcome of verifying one vector file.
///
/// Each message vector counts twice, once per [`Mode`] it is hashed in. Each
/// Monte Carlo checkpoint counts once.
#[derive(Clone, Debug, Default)]
pub struct Report {
    /// The name of the vector file.
    pub file_name: String,

    /// The number of digests that matched.
    pub passed: usize,

    /// The number of digests that didn't match.
    pub failed: usize,

    /// The number of vectors that weren't run because their section's
    /// algorithm isn't supported (e.g. SHA-224's `[L = 28]`).
    pub skipped: usize,

    /// Every mismatch, in file order.
    pub failures: Vec<Failure>,
}

impl Report {
    fn new(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_owned(),
            ..Self::default()
        }
    }

    /// Whether every digest that was computed matched.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// The number of digests that were computed.
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    fn check(&mut self, failure: Failure) {
        if failure.expected == failure.actual {
            self.passed += 1;
            log::debug!(
                "{}:{}: {:?} ({}) ok",
                self.file_name,
                failure.line,
                failure.algorithm,
                failure.mode
            );
        } else {
            self.failed += 1;
            log::error!("{}: {}", self.file_name, failure);
            self.failures.push(failure);
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: completed {} test vectors ({} failed, {} skipped)",
            self.file_name,
            self.total(),
            self.failed,
            self.skipped
        )
    }
}

/// Truncates `msg` to its first `bit_len` bits.
///
/// The result is `ceil(bit_len / 8)` bytes long. When `bit_len` isn't a
/// multiple of 8, the unused low-order bits of the last byte are cleared.
/// Returns `None` if `msg` is shorter than `bit_len` bits.
pub fn truncate_to_bit_len(msg: &[u8], bit_len: usize) -> Option<Vec<u8>> {
    let bit_len = BitLength::from_bits(bit_len);
    let mut truncated = msg.get(..bit_len.as_usize_bytes_rounded_up())?.to_vec();
    let used_bits = bit_len.bits_in_last_partial_byte();
    if used_bits != 0 {
        if let Some(last) = truncated.last_mut() {
            *last &= 0xffu8 << (8 - used_bits);
        }
    }
    Some(truncated)
}

/// Reads the vector file at `path` and verifies every vector in it.
pub fn verify_path(path: &Path) -> Result<Report, Error> {
    let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file_name = path.display().to_string();
    verify(test::File {
        file_name: &file_name,
        contents: &contents,
    })
}

/// Verifies every vector in `test_file`.
pub fn verify(test_file: test::File) -> Result<Report, Error> {
    let mut report = Report::new(test_file.file_name);
    let mut reader = test::Reader::new(&test_file);
    let file_name = reader.file_name();
    let mut section = Section::default();

    while let Some(test_case) = reader.next_test_case() {
        let syntax = |e| Error::syntax(file_name, e);
        let mut test_case = test_case.map_err(syntax)?;

        if reader.current_section().is_empty() {
            return Err(syntax(test_case.error(SyntaxErrorKind::MissingSection)));
        }
        if section.name != reader.current_section() {
            section = Section::new(reader.current_section(), &test_case).map_err(syntax)?;
            if section.algorithm.is_none() {
                log::warn!(
                    "{}:{}: skipping unsupported section [{}]",
                    file_name,
                    test_case.line(),
                    section.name
                );
            }
        }

        let algorithm = match section.algorithm {
            Some(algorithm) => algorithm,
            None => {
                report.skipped += 1;
                continue;
            }
        };

        if test_case.has_attribute("Seed") {
            let seed = test_case.try_consume_bytes("Seed").map_err(syntax)?;
            section.monte_carlo = Some(MonteCarlo {
                ctx: digest::Context::new(algorithm),
                seed,
                next_count: 0,
            });
        } else if test_case.has_attribute("COUNT") {
            let monte_carlo = section.monte_carlo.as_mut().ok_or_else(|| {
                syntax(test_case.error(SyntaxErrorKind::InvalidValue {
                    key: "COUNT".to_owned(),
                    reason: "Monte Carlo checkpoint without a preceding Seed",
                }))
            })?;
            monte_carlo.checkpoint(&mut test_case, &mut report).map_err(|e| match e {
                CheckpointError::Syntax(e) => syntax(e),
                CheckpointError::Engine(e) => Error::Engine(e),
            })?;
        } else {
            verify_message(algorithm, &mut test_case, &mut report).map_err(|e| match e {
                CheckpointError::Syntax(e) => syntax(e),
                CheckpointError::Engine(e) => Error::Engine(e),
            })?;
        }

        if let Some(key) = test_case.unconsumed() {
            let kind = SyntaxErrorKind::UnconsumedAttribute(key.to_owned());
            return Err(syntax(test_case.error(kind)));
        }
    }

    log::info!("{}", report);
    Ok(report)
}

#[derive(Default)]
struct Section {
    name: String,

    // `None` if the section's algorithm isn't supported.
    algorithm: Option<&'static digest::Algorithm>,

    monte_carlo: Option<MonteCarlo>,
}

impl Section {
    fn new(name: &str, test_case: &test::TestCase) -> Result<Self, SyntaxError> {
        let malformed = || test_case.error(SyntaxErrorKind::MalformedSection(name.to_owned()));
        let (key, output_len) = name.split_once('=').ok_or_else(malformed)?;
        if key.trim() != "L" {
            return Err(malformed());
        }
        let output_len = output_len.trim().parse::<usize>().map_err(|_| malformed())?;
        Ok(Self {
            name: name.to_owned(),
            algorithm: digest::lookup_by_output_len(output_len).ok(),
            monte_carlo: None,
        })
    }
}

enum CheckpointError {
    Syntax(SyntaxError),
    Engine(error::AlreadyFinalized),
}

impl From<SyntaxError> for CheckpointError {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<error::AlreadyFinalized> for CheckpointError {
    fn from(e: error::AlreadyFinalized) -> Self {
        Self::Engine(e)
    }
}

fn verify_message(
    algorithm: &'static digest::Algorithm,
    test_case: &mut test::TestCase,
    report: &mut Report,
) -> Result<(), CheckpointError> {
    let bit_len = test_case.try_consume_usize("Len")?;
    let msg = test_case.try_consume_bytes("Msg")?;
    let expected = test_case.try_consume_bytes("MD")?;

    // The "Msg" field contains the dummy value "00" when the length is zero.
    let input = if bit_len == 0 {
        Vec::new()
    } else {
        truncate_to_bit_len(&msg, bit_len).ok_or_else(|| {
            test_case.error(SyntaxErrorKind::InvalidValue {
                key: "Msg".to_owned(),
                reason: "shorter than Len",
            })
        })?
    };

    let mut ctx = digest::Context::new(algorithm);
    for chunk in input.chunks(STREAMING_CHUNK_LEN) {
        ctx.update(chunk)?;
    }
    let streaming = ctx.finish()?;
    let one_shot = digest::digest(algorithm, &input);

    for (mode, actual) in [(Mode::Streaming, streaming), (Mode::OneShot, one_shot)] {
        report.check(Failure {
            line: test_case.line(),
            algorithm,
            mode,
            bit_len,
            input: input.clone(),
            expected: expected.clone(),
            actual: actual.as_ref().to_vec(),
        });
    }

    Ok(())
}

struct MonteCarlo {
    ctx: digest::Context,
    seed: Vec<u8>,
    next_count: usize,
}

impl MonteCarlo {
    fn checkpoint(
        &mut self,
        test_case: &mut test::TestCase,
        report: &mut Report,
    ) -> Result<(), CheckpointError> {
        let count = test_case.try_consume_usize("COUNT")?;
        if count != self.next_count {
            return Err(test_case
                .error(SyntaxErrorKind::InvalidValue {
                    key: "COUNT".to_owned(),
                    reason: "Monte Carlo checkpoints must be numbered 0, 1, 2, ...",
                })
                .into());
        }
        let expected = test_case.try_consume_bytes("MD")?;

        let actual = self.run_rounds()?;
        report.check(Failure {
            line: test_case.line(),
            algorithm: self.ctx.algorithm(),
            mode: Mode::MonteCarlo { count },
            bit_len: self.seed.len() * 8,
            input: self.seed.clone(),
            expected,
            actual: actual.clone(),
        });

        // The next checkpoint starts from the digest computed here, not the
        // one in the file, so that one mismatch is reported only once.
        self.seed = actual;
        self.next_count += 1;
        Ok(())
    }

    // MD[0] = MD[1] = MD[2] = Seed
    // MD[i] = H(MD[i-3] || MD[i-2] || MD[i-1]), for i in 3..(3 + 1000)
    // Returns MD[1002].
    fn run_rounds(&mut self) -> Result<Vec<u8>, error::AlreadyFinalized> {
        let mut mds = [self.seed.clone(), self.seed.clone(), self.seed.clone()];
        for _ in 0..MONTE_CARLO_ROUNDS {
            self.ctx.reset();
            for md in &mds {
                self.ctx.update(md)?;
            }
            let md_i = self.ctx.finish()?;
            mds.rotate_left(1);
            mds[2] = md_i.as_ref().to_vec();
        }
        let [_, _, md_j] = mds;
        Ok(md_j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;

    fn inline(contents: &str) -> test::File {
        test::File {
            file_name: "inline.rsp",
            contents,
        }
    }

    const SHORT_MSG: &str = "\
# Generated for the kat unit tests.

[L = 32]

Len = 0
Msg = 00
MD = e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855

Len = 8
Msg = d3
MD = 28969cdfa74a12c82f3bad960b0b000aca2ac329deea5c2328ebc6f2ba9802c1

Len = 5
Msg = 9f
MD = 79bec7ff3e69d1b470eb8684f2005a867a7980222474cbc1afd26a9a4f206d4a

[L = 48]

Len = 24
Msg = 61626364
MD = cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7
";

    #[test]
    fn test_verify_counts_both_modes() {
        let report = verify(inline(SHORT_MSG)).unwrap();
        assert!(report.is_success(), "{:?}", report.failures);
        assert_eq!(report.passed, 8);
        assert_eq!(report.failed, 0);
        assert_eq!(report.skipped, 0);
        assert_eq!(
            format!("{}", report),
            "inline.rsp: completed 8 test vectors (0 failed, 0 skipped)"
        );
    }

    #[test]
    fn test_mismatch_is_recorded_and_verification_continues() {
        let corrupted = SHORT_MSG.replace(
            "MD = 28969cdfa74a12c82f3bad960b0b000aca2ac329deea5c2328ebc6f2ba9802c1",
            "MD = 28969cdfa74a12c82f3bad960b0b000aca2ac329deea5c2328ebc6f2ba9802c0",
        );
        let report = verify(inline(&corrupted)).unwrap();
        assert!(!report.is_success());
        assert_eq!(report.passed, 6);
        assert_eq!(report.failed, 2);
        assert_eq!(report.failures.len(), 2);

        let failure = &report.failures[0];
        assert_eq!(failure.line, 9);
        assert_eq!(failure.mode, Mode::Streaming);
        assert_eq!(report.failures[1].mode, Mode::OneShot);
        assert_eq!(failure.algorithm, &digest::SHA256);
        assert_eq!(failure.bit_len, 8);
        assert_eq!(failure.input, [0xd3]);
        assert_eq!(failure.expected.last(), Some(&0xc0));
        assert_eq!(failure.actual.last(), Some(&0xc1));
        assert!(format!("{}", failure).starts_with("FAIL SHA256 (streaming) at line 9: Len = 8"));
    }

    #[test]
    fn test_unsupported_section_is_skipped() {
        let contents = "[L = 28]\n\nLen = 0\nMsg = 00\nMD = 00\n\nLen = 8\nMsg = 00\nMD = 00\n";
        let report = verify(inline(contents)).unwrap();
        assert_eq!(report.skipped, 2);
        assert_eq!(report.total(), 0);
        assert!(report.is_success());
    }

    #[test]
    fn test_syntax_errors() {
        for (contents, line) in [
            // `Msg` is shorter than `Len`.
            ("[L = 32]\n\nLen = 16\nMsg = 00\nMD = 00\n", 3),
            // Test case outside any section.
            ("Len = 0\nMsg = 00\nMD = 00\n", 1),
            // Unconsumed attribute.
            ("[L = 32]\nLen = 0\nMsg = 00\nMD = 00\nExtra = 1\n", 2),
            // Checkpoint without a seed.
            ("[L = 32]\nCOUNT = 0\nMD = 00\n", 2),
        ] {
            match verify(inline(contents)) {
                Err(Error::Syntax { file, source }) => {
                    assert_eq!(file, "inline.rsp");
                    assert_eq!(source.line(), line, "{}", contents);
                }
                other => panic!("{:?} for {}", other, contents),
            }
        }
    }

    #[test]
    fn test_invalid_hex() {
        match verify(inline("[L = 32]\n\nLen = 8\nMsg = zz\nMD = 00\n")) {
            Err(Error::Hex { line, key, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(key, "Msg");
            }
            other => panic!("{:?}", other),
        }
    }

    const MONTE: &str = "\
[L = 32]

Seed = 000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f

COUNT = 0
MD = 0d0a4b6dc0ba9a5e7089a00eb0042f465641fa860944bcb074a88d76e8df7893

COUNT = 1
MD = 88cb2447640f5a4e7684eb7d06fe8a6ec175b492114bb88c7ab489d5eefd1bd9
";

    #[test]
    fn test_monte_carlo() {
        let report = verify(inline(MONTE)).unwrap();
        assert!(report.is_success(), "{:?}", report.failures);
        assert_eq!(report.passed, 2);
    }

    #[test]
    fn test_monte_carlo_count_gap() {
        let gap = MONTE.replace("COUNT = 1", "COUNT = 2");
        assert!(matches!(verify(inline(&gap)), Err(Error::Syntax { .. })));
    }

    #[test]
    fn test_truncate_to_bit_len() {
        assert_eq!(truncate_to_bit_len(&[0xff, 0xff], 0), Some(Vec::new()));
        assert_eq!(truncate_to_bit_len(&[0xff, 0xff], 1), Some([0x80].to_vec()));
        assert_eq!(truncate_to_bit_len(&[0xff, 0xff], 5), Some([0xf8].to_vec()));
        assert_eq!(truncate_to_bit_len(&[0xab, 0xff], 8), Some([0xab].to_vec()));
        assert_eq!(truncate_to_bit_len(&[0xab, 0xff], 9), Some([0xab, 0x80].to_vec()));
        assert_eq!(truncate_to_bit_len(&[0xab, 0xcd], 16), Some([0xab, 0xcd].to_vec()));
        assert_eq!(truncate_to_bit_len(&[0xab], 9), None);
    }

    #[test]
    fn test_verify_path_missing_file() {
        let err = verify_path(Path::new("no/such/file.rsp")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(format!("{}", err).starts_with("cannot read no/such/file.rsp"));
    }
}
