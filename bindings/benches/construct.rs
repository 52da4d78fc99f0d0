use bindings::constructors::{immediate, instruction};
use bindings::Value;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_construct(c: &mut Criterion) {
    let imm_args = vec![Value::from(0xDEADu64), Value::from(2u64)];
    c.bench_function("immediate(value, size)", |b| {
        b.iter(|| immediate(black_box(&imm_args)))
    });

    let inst_args = vec![Value::from(0x1000u64), Value::Bytes(vec![0x48, 0x31, 0xC0])];
    c.bench_function("instruction(address, opcode)", |b| {
        b.iter(|| instruction(black_box(&inst_args)))
    });
}

criterion_group!(benches, bench_construct);
criterion_main!(benches);
