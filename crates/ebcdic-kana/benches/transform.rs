//! Throughput of the decoder and encoder over mixed Latin and katakana text.
#![expect(missing_docs)]
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use ebcdic_kana::{EBCDIC_KANA, Transform};

/// Every assigned byte, repeated to roughly `len` bytes.
fn legacy_payload(len: usize) -> Vec<u8> {
    let assigned: Vec<u8> = (0..=0xFFu8).filter(|&b| EBCDIC_KANA.is_mapped(b)).collect();
    assigned.iter().copied().cycle().take(len).collect()
}

fn drive<T: Transform>(transform: &T, src: &[u8], dst: &mut [u8]) -> usize {
    let mut total = 0;
    let mut consumed = 0;
    loop {
        let res = transform.transform(dst, &src[consumed..], true);
        total += res.written;
        consumed += res.consumed;
        if !res.status.is_resumable() {
            return total;
        }
    }
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    for &len in &[1_024usize, 64 * 1_024] {
        let legacy = legacy_payload(len);
        let utf8 = EBCDIC_KANA.decode_to_string(&legacy).into_bytes();
        let mut dst = vec![0u8; 4_096];

        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("decode", len), &legacy, |b, src| {
            b.iter(|| black_box(drive(&EBCDIC_KANA.decoder(), black_box(src), &mut dst)));
        });
        group.bench_with_input(BenchmarkId::new("encode", len), &utf8, |b, src| {
            b.iter(|| black_box(drive(&EBCDIC_KANA.encoder(), black_box(src), &mut dst)));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(5));
    targets = bench_transform
}
criterion_main!(benches);
