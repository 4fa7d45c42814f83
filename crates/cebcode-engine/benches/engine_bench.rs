// Criterion benchmarks for cebcode-engine.
//
// Run:
//   cargo bench -p cebcode-engine

use criterion::{Criterion, criterion_group, criterion_main};

use cebcode_core::{DonorKind, DonorRecord};
use cebcode_engine::{CodeEngine, GenerateOptions};

/// Synthetic registry of the rough size of the production donor list.
fn synthetic_registry(size: usize) -> Vec<DonorRecord> {
    (0..size)
        .map(|i| {
            DonorRecord::new(
                &format!("Synthetic Donor Number {i}"),
                &format!("SD{i:03}"),
                "Synthetic",
                if i % 2 == 0 {
                    DonorKind::Government
                } else {
                    DonorKind::NonGovernment
                },
            )
        })
        .collect()
}

const NAMES: &[&str] = &[
    "World Health Organization",
    "United Nations Children's Fund",
    "International Bank for Reconstruction and Development",
    "Bill & Melinda Gates Foundation",
    "Save-the-Children",
    "Rockefeller",
    "Deutsche Gesellschaft fuer Internationale Zusammenarbeit",
    "Agency for Technical Cooperation and Development",
];

fn bench_generate_code(c: &mut Criterion) {
    let engine = CodeEngine::new(synthetic_registry(500));
    c.bench_function("generate_code_8_names_500_donors", |b| {
        b.iter(|| {
            for name in NAMES {
                std::hint::black_box(engine.generate_code(&GenerateOptions::new(name)).unwrap());
            }
        });
    });
}

fn bench_validate_custom_code(c: &mut Criterion) {
    let engine = CodeEngine::new(synthetic_registry(500));
    c.bench_function("validate_custom_code_500_donors", |b| {
        b.iter(|| {
            std::hint::black_box(engine.validate_custom_code("SD250"));
            std::hint::black_box(engine.validate_custom_code("FREECODE"));
        });
    });
}

criterion_group!(benches, bench_generate_code, bench_validate_custom_code);
criterion_main!(benches);
