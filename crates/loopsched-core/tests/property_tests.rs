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

//! Property-based tests for the aggregation pipeline.
//!
//! # Properties Tested
//!
//! 1. **Grouping completeness**: every measurement lands in exactly one group
//!    and group counts sum to the input size
//! 2. **Mean bounds**: each group mean lies between its smallest and largest time
//! 3. **Chunk exponent**: `round(log2(2^k)) == k` for every supported `k`
//! 4. **Selection minimality**: no group at the selected thread count and loop
//!    is faster than the best configuration

use loopsched_core::{
    best_configuration, AggregateTable, ChunkExponent, GroupFilter, GroupKey, LoopId, Measurement,
    Schedule, TransformedMeasurement, MAX_CHUNK_EXPONENT,
};
use proptest::prelude::*;

fn arb_measurement() -> impl Strategy<Value = Measurement> {
    (
        prop::sample::select(Schedule::ALL.to_vec()),
        0u32..=MAX_CHUNK_EXPONENT as u32,
        prop::sample::select(vec![1u32, 2, 4, 6, 8]),
        prop::sample::select(LoopId::ALL.to_vec()),
        0.001f64..10.0,
        any::<bool>(),
    )
        .prop_map(|(schedule, k, threads, loop_id, time, without_chunk)| {
            let chunked = schedule.accepts_chunksize()
                && !(schedule == Schedule::Static && without_chunk);
            let chunksize = if chunked { Some(1u32 << k) } else { None };
            Measurement::new(schedule, chunksize, threads, loop_id, time).unwrap()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: group counts sum to the number of measurements, and each
    /// measurement's key is present in the table.
    #[test]
    fn prop_grouping_completeness(
        measurements in prop::collection::vec(arb_measurement(), 0..200)
    ) {
        let table = AggregateTable::from_measurements(&measurements).unwrap();

        prop_assert_eq!(table.total_count(), measurements.len());
        for measurement in &measurements {
            let transformed = TransformedMeasurement::from_measurement(measurement).unwrap();
            prop_assert!(table.get(&GroupKey::of(&transformed)).is_some());
        }
    }

    /// Property: a group mean never leaves the range of its samples.
    #[test]
    fn prop_mean_within_sample_range(
        measurements in prop::collection::vec(arb_measurement(), 1..200)
    ) {
        let table = AggregateTable::from_measurements(&measurements).unwrap();

        for (key, stats) in &table {
            let times: Vec<f64> = measurements
                .iter()
                .map(|m| TransformedMeasurement::from_measurement(m).unwrap())
                .filter(|m| GroupKey::of(m) == *key)
                .map(|m| m.time)
                .collect();
            let min = times.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = times.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

            prop_assert_eq!(stats.count, times.len());
            prop_assert!(stats.mean >= min - 1e-12 && stats.mean <= max + 1e-12);
            prop_assert_eq!(stats.std_dev.is_none(), stats.count == 1);
        }
    }

    /// Property: the selected configuration is a minimum.
    #[test]
    fn prop_best_is_minimal(measurements in prop::collection::vec(arb_measurement(), 1..200)) {
        let table = AggregateTable::from_measurements(&measurements).unwrap();
        let threads = measurements[0].num_threads;
        let loop_id = measurements[0].loop_id;

        let best = best_configuration(&table, threads, loop_id).unwrap();
        let filter = GroupFilter::new().threads(threads).loop_id(loop_id);
        for (_, stats) in table.matching(&filter) {
            prop_assert!(best.stats.mean <= stats.mean);
        }
    }
}

#[test]
fn test_power_of_two_exponents() {
    for k in 0..=MAX_CHUNK_EXPONENT {
        assert_eq!(ChunkExponent::from_chunksize(1u32 << k).unwrap().value(), k);
    }
}
