// Dweve loopsched - Loop Schedule Benchmark Analysis
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Aggregation pipeline benchmarks.
//!
//! Measures transform + aggregate, best-configuration selection and chart
//! data building over the synthetic full benchmark run, replicated to larger
//! trial counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use loopsched_core::{best_configuration, build_charts, AggregateTable, AnalysisConfig, LoopId};
use loopsched_test::fixtures;

const TRIAL_MULTIPLIERS: [usize; 3] = [1, 10, 100];

fn bench_aggregate(c: &mut Criterion) {
    let base = fixtures::full_run();
    let mut group = c.benchmark_group("aggregate");

    for multiplier in TRIAL_MULTIPLIERS {
        let measurements: Vec<_> = base
            .iter()
            .cycle()
            .take(base.len() * multiplier)
            .cloned()
            .collect();

        group.throughput(Throughput::Elements(measurements.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(measurements.len()),
            &measurements,
            |b, measurements| {
                b.iter(|| AggregateTable::from_measurements(black_box(measurements)))
            },
        );
    }

    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let table = AggregateTable::from_measurements(&fixtures::full_run()).unwrap();

    c.bench_function("best_configuration", |b| {
        b.iter(|| best_configuration(black_box(&table), 6, LoopId::One))
    });
}

fn bench_charts(c: &mut Criterion) {
    let table = AggregateTable::from_measurements(&fixtures::full_run()).unwrap();
    let config = AnalysisConfig::default();

    c.bench_function("build_charts", |b| {
        b.iter(|| build_charts(black_box(&table), &config))
    });
}

criterion_group!(benches, bench_aggregate, bench_select, bench_charts);
criterion_main!(benches);
