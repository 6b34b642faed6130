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

//! Loading the shared fixtures through the CSV front end.

use loopsched_core::{best_configuration, AggregateTable, LoopId, Schedule};
use loopsched_csv::{from_csv, from_csv_reader, to_csv, CsvError};
use loopsched_test::fixtures::errors::invalid_csv_samples;
use loopsched_test::{results_csv_path, RESULTS_CSV, RESULTS_CSV_ROWS};
use std::fs::File;

#[test]
fn test_sample_results_load() {
    let measurements = from_csv(RESULTS_CSV).unwrap();
    assert_eq!(measurements.len(), RESULTS_CSV_ROWS);

    let table = AggregateTable::from_measurements(&measurements).unwrap();
    assert_eq!(table.total_count(), RESULTS_CSV_ROWS);

    let best = best_configuration(&table, 6, LoopId::One).unwrap();
    assert_eq!(best.key.schedule, Schedule::Dynamic);
    assert_eq!(best.key.chunk.map(|e| e.chunksize()), Some(8));
}

#[test]
fn test_sample_results_from_file() {
    let file = File::open(results_csv_path()).unwrap();
    let measurements = from_csv_reader(file).unwrap();
    assert_eq!(measurements.len(), RESULTS_CSV_ROWS);
}

#[test]
fn test_every_invalid_sample_is_rejected() {
    for (name, csv) in invalid_csv_samples() {
        assert!(from_csv(csv).is_err(), "sample '{}' was accepted", name);
    }
}

#[test]
fn test_invalid_samples_carry_row_context() {
    for (name, csv) in invalid_csv_samples() {
        let err = from_csv(csv).unwrap_err();
        if !matches!(err, CsvError::MissingColumn(_)) {
            assert_eq!(err.row(), Some(1), "sample '{}': {}", name, err);
        }
    }
}

#[test]
fn test_summary_of_sample_results() {
    let table = AggregateTable::from_measurements(&from_csv(RESULTS_CSV).unwrap()).unwrap();
    let summary = to_csv(&table).unwrap();

    // Header plus one row per group.
    assert_eq!(summary.lines().count(), table.len() + 1);
    // The serial reference has two trials, so its std is defined.
    let single = summary
        .lines()
        .find(|line| line.starts_with("single,,1,1,"))
        .unwrap();
    assert!(!single.ends_with(','));
}
