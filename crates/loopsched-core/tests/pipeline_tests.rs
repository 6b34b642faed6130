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

//! End-to-end tests over the shared fixtures.

use loopsched_core::{
    best_config_report, best_configuration, build_charts, chart_plan, reference_time,
    AggregateTable, AnalysisConfig, AnalysisError, ChartFamily, ChunkExponent, LoopId, Schedule,
};
use loopsched_test::fixtures;

#[test]
fn test_every_fixture_aggregates_completely() {
    for (name, fixture) in fixtures::all() {
        let measurements = fixture();
        let table = AggregateTable::from_measurements(&measurements).unwrap();
        assert_eq!(
            table.total_count(),
            measurements.len(),
            "fixture {} lost measurements",
            name
        );
    }
}

#[test]
fn test_full_run_best_configurations() {
    let table = AggregateTable::from_measurements(&fixtures::full_run()).unwrap();

    let loop1 = best_configuration(&table, 6, LoopId::One).unwrap();
    assert_eq!(loop1.key.schedule, Schedule::Dynamic);
    assert_eq!(loop1.key.chunk, Some(ChunkExponent::new(3).unwrap()));
    assert_eq!(loop1.stats.count, 2);

    let loop2 = best_configuration(&table, 6, LoopId::Two).unwrap();
    assert_eq!(loop2.key.schedule, Schedule::Guided);
    assert_eq!(loop2.key.chunk, Some(ChunkExponent::new(2).unwrap()));
}

#[test]
fn test_full_run_report() {
    let table = AggregateTable::from_measurements(&fixtures::full_run()).unwrap();
    let lines = best_config_report(&table, &AnalysisConfig::default()).unwrap();

    assert_eq!(lines.len(), 2);
    let first = lines[0].to_string();
    assert!(first.starts_with(
        "The best performance for loop 1 on 6 threads is achieved with dynamic schedule \
         with a chunksize of 8"
    ));
}

#[test]
fn test_full_run_charts() {
    let table = AggregateTable::from_measurements(&fixtures::full_run()).unwrap();
    let charts = build_charts(&table, &AnalysisConfig::default()).unwrap();
    assert_eq!(charts.len(), 14);

    for chart in &charts {
        // The full run covers every configuration, so no series is empty.
        for series in &chart.series {
            assert!(!series.is_empty(), "{} has an empty series", chart.id.file_stem());
        }
    }

    let six = charts
        .iter()
        .find(|c| c.id.family == ChartFamily::SixThreads && c.id.loop_id == LoopId::One)
        .unwrap();
    assert_eq!(six.series[0].points.len(), 7);
    assert_eq!(six.reference_lines.len(), 2);

    let speedup = charts
        .iter()
        .find(|c| c.id.family == ChartFamily::BestSpeedup && c.id.loop_id == LoopId::One)
        .unwrap();
    let reference = reference_time(&table, LoopId::One).unwrap();
    assert!((reference.mean - 4.0).abs() < 1e-12);
    // Perfect scaling in the synthetic model: speedup at 16 threads is 16.
    let last = speedup.series[0].points.last().unwrap();
    assert_eq!(last.x, 16.0);
    assert!((last.y - 16.0).abs() < 1e-9);
}

#[test]
fn test_tied_run_is_deterministic() {
    let table = AggregateTable::from_measurements(&fixtures::tied_run()).unwrap();
    for _ in 0..3 {
        let best = best_configuration(&table, 6, LoopId::One).unwrap();
        assert_eq!(best.key.schedule, Schedule::Guided);
        assert_eq!(best.key.chunk, Some(ChunkExponent::new(2).unwrap()));
    }
}

#[test]
fn test_missing_reference_stops_the_plan() {
    let table = AggregateTable::from_measurements(&fixtures::without_reference()).unwrap();
    let config = AnalysisConfig::default().with_loops([LoopId::One]);

    // The report does not need the reference.
    assert!(best_config_report(&table, &config).is_ok());
    assert!(matches!(
        chart_plan(&table, &config),
        Err(AnalysisError::MissingReference { loop_id: LoopId::One, .. })
    ));
}
