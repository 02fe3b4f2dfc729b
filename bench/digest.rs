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

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sha2_engine::digest;

static ALGORITHMS: &[(&str, &digest::Algorithm)] = &[
    ("sha256", &digest::SHA256),
    ("sha384", &digest::SHA384),
    ("sha512", &digest::SHA512),
];

const INPUT_LENGTHS: &[usize] = &[
    // Dominated by padding and finalization.
    0,
    32,
    64,
    128,
    1024,
    8192,
    1024 * 1024,
];

// Deliberately not a multiple of either block length.
const STREAMING_CHUNK_LEN: usize = 61;

fn input(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}

fn oneshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest::oneshot");
    for &(alg_name, algorithm) in ALGORITHMS {
        for &input_len in INPUT_LENGTHS {
            let input = input(input_len);
            group.throughput(Throughput::Bytes(input_len as u64));
            group.bench_with_input(BenchmarkId::new(alg_name, input_len), &input, |b, input| {
                b.iter(|| {
                    let digest = digest::digest(algorithm, input);
                    black_box(digest.as_ref().len())
                })
            });
        }
    }
    group.finish();
}

fn streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest::streaming");
    for &(alg_name, algorithm) in ALGORITHMS {
        for &input_len in INPUT_LENGTHS {
            let input = input(input_len);
            group.throughput(Throughput::Bytes(input_len as u64));
            group.bench_with_input(BenchmarkId::new(alg_name, input_len), &input, |b, input| {
                let mut ctx = digest::Context::new(algorithm);
                b.iter(|| {
                    ctx.reset();
                    for chunk in input.chunks(STREAMING_CHUNK_LEN) {
                        let _ = ctx.update(chunk);
                    }
                    black_box(ctx.finish().map(|digest| digest.as_ref().len()))
                })
            });
        }
    }
    group.finish();
}

criterion_group!(digest, oneshot, streaming);
criterion_main!(digest);
