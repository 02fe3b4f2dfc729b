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

//! `shavs`: verifies the SHA-2 engine against SHAVS response files.
//!
//! ```text
//! shavs [VECTOR_DIR [STEM...]]
//! ```
//!
//! Each `STEM` names a file `VECTOR_DIR/STEM.rsp`, e.g. `SHA256ShortMsg`.
//! Without stems, every `SHA{256,384,512}{SET}.rsp` file present in
//! `VECTOR_DIR` is verified, where `SET` is one of `Examples`, `ShortMsg`,
//! `LongMsg`, `Monte` and `MaskedBitMsg`. This matches the names of the NIST
//! CAVP byte-oriented response files, so an unpacked copy of them can be
//! verified directly. NIST's bit-oriented `BitMsg` files are not matched: their
//! digests cover the exact bit string, which a byte-oriented engine can't hash.
//!
//! Without `VECTOR_DIR`, the `vectors/published` and `vectors/generated`
//! directories next to this crate's manifest are verified.
//!
//! Mismatches are logged with the full diagnostic and verification continues.
//! The exit status is 0 if every digest matched, 1 if any didn't, and 2 if a
//! file couldn't be read or parsed. Set `RUST_LOG=debug` to see every vector.

use anyhow::{bail, Context as _};
use sha2_engine::kat;
use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

const ALGORITHMS: [&str; 3] = ["SHA256", "SHA384", "SHA512"];
const VECTOR_SETS: [&str; 5] = ["Examples", "ShortMsg", "LongMsg", "Monte", "MaskedBitMsg"];
const DEFAULT_VECTOR_DIRS: [&str; 2] = ["published", "generated"];

fn main() -> ExitCode {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    builder.format_timestamp(None);
    builder.try_init().unwrap_or_default();

    match run(env::args().skip(1).collect()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            log::error!("{:#}", err);
            ExitCode::from(2)
        }
    }
}

/// Returns whether every digest in every file matched.
fn run(args: Vec<String>) -> anyhow::Result<bool> {
    let mut args = args.into_iter();
    let paths = match args.next() {
        Some(dir) => {
            let stems: Vec<String> = args.collect();
            vector_files(Path::new(&dir), &stems)
        }
        None => default_vector_dirs()
            .iter()
            .flat_map(|dir| vector_files(dir, &[]))
            .collect(),
    };
    if paths.is_empty() {
        bail!("no vector files found");
    }

    let mut success = true;
    let (mut passed, mut failed, mut skipped) = (0, 0, 0);
    for path in &paths {
        let report = kat::verify_path(path)
            .with_context(|| format!("verifying {}", path.display()))?;
        println!("{}", report);
        passed += report.passed;
        failed += report.failed;
        skipped += report.skipped;
        success &= report.is_success();
    }

    println!(
        "Completed {} test vectors in {} files ({} failed, {} skipped)",
        passed + failed,
        paths.len(),
        failed,
        skipped
    );
    Ok(success)
}

fn default_vector_dirs() -> Vec<PathBuf> {
    let vectors = Path::new(env!("CARGO_MANIFEST_DIR")).join("vectors");
    DEFAULT_VECTOR_DIRS
        .iter()
        .map(|dir| vectors.join(dir))
        .collect()
}

fn vector_files(dir: &Path, stems: &[String]) -> Vec<PathBuf> {
    if !stems.is_empty() {
        return stems
            .iter()
            .map(|stem| dir.join(format!("{}.rsp", stem)))
            .collect();
    }

    ALGORITHMS
        .iter()
        .flat_map(|algorithm| {
            VECTOR_SETS
                .iter()
                .map(move |set| dir.join(format!("{}{}.rsp", algorithm, set)))
        })
        .filter(|path| {
            let exists = path.is_file();
            if !exists {
                log::debug!("{} not present; skipping", path.display());
            }
            exists
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_files() {
        let [published, generated] = <[PathBuf; 2]>::try_from(default_vector_dirs()).unwrap();

        let paths = vector_files(&published, &[]);
        assert_eq!(paths.len(), ALGORITHMS.len());
        assert!(paths[0].ends_with("SHA256Examples.rsp"));

        let paths = vector_files(&generated, &[]);
        assert_eq!(paths.len(), ALGORITHMS.len() * (VECTOR_SETS.len() - 1));
        assert!(paths[0].ends_with("SHA256ShortMsg.rsp"));
    }

    #[test]
    fn test_explicit_stems() {
        let paths = vector_files(Path::new("v"), &["SHA384Monte".to_owned()]);
        assert_eq!(paths, [Path::new("v").join("SHA384Monte.rsp")]);
    }

    #[test]
    fn test_run_selected_files() {
        let [published, generated] = <[PathBuf; 2]>::try_from(default_vector_dirs()).unwrap();
        let ok = run(vec![
            generated.display().to_string(),
            "SHA256ShortMsg".to_owned(),
            "SHA512MaskedBitMsg".to_owned(),
        ])
        .unwrap();
        assert!(ok);
        assert!(run(vec![published.display().to_string()]).unwrap());
    }

    #[test]
    fn test_run_missing_file_is_an_error() {
        let [_, generated] = <[PathBuf; 2]>::try_from(default_vector_dirs()).unwrap();
        assert!(run(vec![generated.display().to_string(), "SHA224ShortMsg".to_owned()]).is_err());
    }

    #[test]
    fn test_empty_directory_is_an_error() {
        assert!(run(vec![env!("CARGO_MANIFEST_DIR").to_owned()]).is_err());
    }
}
