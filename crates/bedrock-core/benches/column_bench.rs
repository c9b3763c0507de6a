// ─────────────────────────────────────────────────────────────────────
// SCPN Bedrock Thermal — Bedrock Column Benchmark
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use bedrock_core::unit::{BedThermalUnit, FullBedThermalUnit, InitOptions};
use bedrock_types::config::{BedrockConfig, BedrockGridConfig};
use bedrock_types::state::Grid2D;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn initialized_unit(n: usize, levels: usize) -> (FullBedThermalUnit, Grid2D) {
    let grid = Grid2D::new(n, n);
    let config = BedrockConfig {
        grid: BedrockGridConfig {
            depth: 1000.0,
            levels,
        },
        ..BedrockConfig::default()
    };
    let mut unit = FullBedThermalUnit::new(&grid, &config).expect("valid config");
    unit.init(InitOptions::default()).expect("init should succeed");
    (unit, grid)
}

fn bench_bedrock_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("bedrock_update");

    for &(n, levels) in &[(100usize, 20usize), (300, 20), (300, 100)] {
        group.bench_function(format!("{n}x{n}_{levels}_levels"), |b| {
            b.iter_batched(
                || {
                    let (mut unit, grid) = initialized_unit(n, levels);
                    let top = grid.filled(263.15);
                    unit.bootstrap(&top).expect("bootstrap should succeed");
                    (unit, top)
                },
                |(mut unit, top)| {
                    let dt = unit.max_timestep().value().unwrap_or(1.0);
                    unit.update(&top, 0.0, dt).expect("step should succeed");
                    black_box(unit.flux_through_top_surface()[[0, 0]]);
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_bedrock_update);
criterion_main!(benches);
