use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use m6502::{Cpu, FlatMemory, MemoryBus};

/// Loop at $8000 mixing loads, stores, index arithmetic and ADC.
fn bench_memory() -> FlatMemory {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);

    let program = [
        0xA9, 0x42, // LDA #$42
        0x8D, 0x00, 0x20, // STA $2000
        0xA2, 0x10, // LDX #$10
        0xA0, 0x20, // LDY #$20
        0xE8, // INX
        0xC8, // INY
        0xCA, // DEX
        0x88, // DEY
        0x69, 0x01, // ADC #$01
        0xBD, 0xF8, 0x20, // LDA $20F8,X (crosses a page)
        0x4C, 0x00, 0x80, // JMP $8000
    ];
    for (offset, byte) in program.into_iter().enumerate() {
        memory.write(0x8000 + offset as u16, byte);
    }

    memory
}

fn bench_single_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    group.bench_function("single_instruction", |b| {
        let mut memory = bench_memory();
        let mut cpu = Cpu::new();
        cpu.reset(&memory);
        b.iter(|| {
            black_box(cpu.step(&mut memory).ok());
        });
    });

    group.finish();
}

fn bench_execute_budget(c: &mut Criterion) {
    let mut group = c.benchmark_group("execute");

    for budget in [100u32, 10_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(budget), &budget, |b, &budget| {
            let mut memory = bench_memory();
            let mut cpu = Cpu::new();
            b.iter(|| {
                cpu.reset(&memory);
                black_box(cpu.execute(budget, &mut memory).ok());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_step, bench_execute_budget);
criterion_main!(benches);
