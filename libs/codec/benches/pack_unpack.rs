//! Pack/unpack throughput for both addressing modes
//!
//! The codec sits on the hot path of every cross-process send, so pack and
//! unpack are benchmarked separately over a representative payload size.

use std::sync::Arc;

use codec::MailEnvelope;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use types::{ActorAddress, OpaqueBytes};

fn bench_pack(c: &mut Criterion) {
    let payload = Arc::new(OpaqueBytes::new(vec![0x5A; 256]));

    let by_address = MailEnvelope::by_address(
        ActorAddress::new(1, 7),
        ActorAddress::new(2, 3),
        Arc::clone(&payload),
    );
    let by_name = MailEnvelope::by_name(ActorAddress::new(1, 7), 9, "worker-42", payload);

    let mut buf = vec![0u8; by_address.required_size().max(by_name.required_size())];

    c.bench_function("pack_by_address_256b", |b| {
        b.iter(|| black_box(by_address.pack(black_box(&mut buf)).unwrap()))
    });
    c.bench_function("pack_by_name_256b", |b| {
        b.iter(|| black_box(by_name.pack(black_box(&mut buf)).unwrap()))
    });
}

fn bench_unpack(c: &mut Criterion) {
    let payload = Arc::new(OpaqueBytes::new(vec![0x5A; 256]));

    let by_address = MailEnvelope::by_address(
        ActorAddress::new(1, 7),
        ActorAddress::new(2, 3),
        Arc::clone(&payload),
    );
    let by_name = MailEnvelope::by_name(ActorAddress::new(1, 7), 9, "worker-42", payload);

    let mut addr_frame = vec![0u8; by_address.required_size()];
    by_address.pack(&mut addr_frame).unwrap();
    let mut name_frame = vec![0u8; by_name.required_size()];
    by_name.pack(&mut name_frame).unwrap();

    c.bench_function("unpack_by_address_256b", |b| {
        b.iter(|| MailEnvelope::<OpaqueBytes>::unpack(black_box(&addr_frame)).unwrap())
    });
    c.bench_function("unpack_by_name_256b", |b| {
        b.iter(|| MailEnvelope::<OpaqueBytes>::unpack(black_box(&name_frame)).unwrap())
    });
}

criterion_group!(benches, bench_pack, bench_unpack);
criterion_main!(benches);
