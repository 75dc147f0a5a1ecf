//! Throughput of sequential record transfer through the checked APIs.
//!
//! Each iteration moves `RECORDS` fixed-width records through a view, once
//! with panic-style calls and once with result-style calls.

use buffer::{byte_count, BigEndian, LittleEndian, ReadView, WriteView};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

type Record = (LittleEndian<u32>, BigEndian<u16>, bool, LittleEndian<u64>);

const RECORD_BYTES: usize = byte_count::<Record>();

fn encode_records(buf: &mut [u8], count: usize) {
    let mut view = WriteView::new(buf);
    for i in 0..count {
        let i = i as u64;
        view.write((
            LittleEndian(i as u32),
            BigEndian(i as u16),
            i % 2 == 0,
            LittleEndian(i.wrapping_mul(0x9E37_79B9)),
        ));
    }
}

fn write_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_records");

    for count in [16usize, 256, 4096] {
        group.throughput(Throughput::Bytes((count * RECORD_BYTES) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut buf = vec![0u8; count * RECORD_BYTES];
            b.iter(|| encode_records(black_box(&mut buf), count));
        });
    }
    group.finish();
}

fn read_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_records");

    for count in [16usize, 256, 4096] {
        let mut buf = vec![0u8; count * RECORD_BYTES];
        encode_records(&mut buf, count);

        group.throughput(Throughput::Bytes(buf.len() as u64));
        group.bench_with_input(BenchmarkId::new("panic", count), &buf, |b, buf| {
            b.iter(|| {
                let mut view = ReadView::new(black_box(buf));
                let mut sum = 0u64;
                while !view.is_empty() {
                    let (a, _, _, d) = view.read::<Record>();
                    sum = sum.wrapping_add(u64::from(a)).wrapping_add(d);
                }
                sum
            });
        });
        group.bench_with_input(BenchmarkId::new("result", count), &buf, |b, buf| {
            b.iter(|| {
                let mut view = ReadView::new(black_box(buf));
                let mut sum = 0u64;
                while !view.is_empty() {
                    if let (Ok(a), _, _, Ok(d)) = view.try_read::<Record>() {
                        sum = sum.wrapping_add(u64::from(a)).wrapping_add(d);
                    }
                }
                sum
            });
        });
    }
    group.finish();
}

criterion_group!(benches, write_records, read_records);
criterion_main!(benches);
