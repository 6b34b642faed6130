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

//! Complete and partial benchmark runs.

use super::builders::MeasurementSetBuilder;
use loopsched_core::{ChunkExponent, LoopId, Measurement, Schedule, CHUNKED_SCHEDULES};

/// Thread counts covered by [`full_run`].
pub const FULL_RUN_THREADS: [u32; 6] = [1, 2, 4, 6, 8, 16];

/// Trial factors of [`full_run`]; they average to one.
pub const FULL_RUN_TRIALS: [f64; 2] = [0.99, 1.01];

/// Mean time of a configuration in the synthetic model behind [`full_run`]
/// and the sample result file.
///
/// Loop 1 is fastest with `dynamic` at chunk size 8, loop 2 with `guided` at
/// chunk size 4. Parallel runs scale perfectly with the thread count.
pub fn synthetic_time(
    schedule: Schedule,
    chunk: Option<ChunkExponent>,
    num_threads: u32,
    loop_id: LoopId,
) -> f64 {
    let serial = match loop_id {
        LoopId::One => 4.0,
        LoopId::Two => 6.0,
    };
    if schedule == Schedule::Single {
        return serial;
    }

    let k = chunk.map(|e| f64::from(e.value()));
    let factor = match (schedule, k) {
        (Schedule::Static, Some(k)) => 1.20 + 0.02 * k,
        (Schedule::Static, None) => 1.25,
        (Schedule::Dynamic, Some(k)) => {
            let base = if loop_id == LoopId::One { 1.0 } else { 1.15 };
            base + 0.03 * (k - 3.0).abs()
        }
        (Schedule::Guided, Some(k)) => {
            let base = if loop_id == LoopId::Two { 1.0 } else { 1.12 };
            base + 0.03 * (k - 2.0).abs()
        }
        (Schedule::Affinity, _) => 1.10,
        _ => 1.30,
    };

    serial / f64::from(num_threads) * factor
}

/// Every schedule, chunk size, thread count and loop, two trials each.
pub fn full_run() -> Vec<Measurement> {
    let mut builder = MeasurementSetBuilder::new().trials(&FULL_RUN_TRIALS);

    for loop_id in LoopId::ALL {
        builder = builder.run(
            Schedule::Single,
            None,
            1,
            loop_id,
            synthetic_time(Schedule::Single, None, 1, loop_id),
        );
        for threads in FULL_RUN_THREADS {
            for schedule in CHUNKED_SCHEDULES {
                builder = builder.chunk_sweep(schedule, threads, loop_id, |exponent| {
                    synthetic_time(schedule, Some(exponent), threads, loop_id)
                });
            }
            for schedule in [Schedule::Static, Schedule::Auto, Schedule::Affinity] {
                builder = builder.run(
                    schedule,
                    None,
                    threads,
                    loop_id,
                    synthetic_time(schedule, None, threads, loop_id),
                );
            }
        }
    }

    builder.build()
}

/// The smallest set the full chart plan can be built from: a reference,
/// both six-thread baselines and one chunked run per loop.
pub fn minimal_run() -> Vec<Measurement> {
    let mut builder = MeasurementSetBuilder::new();
    for loop_id in LoopId::ALL {
        builder = builder
            .run(Schedule::Single, None, 1, loop_id, 10.0)
            .run(Schedule::Auto, None, 6, loop_id, 3.0)
            .run(Schedule::Static, None, 6, loop_id, 2.0)
            .run(Schedule::Dynamic, Some(4), 6, loop_id, 1.0);
    }
    builder.build()
}

/// Loop 1 on six threads where `static` 2, `guided` 8 and `guided` 4 share
/// the minimum mean.
pub fn tied_run() -> Vec<Measurement> {
    MeasurementSetBuilder::new()
        .run(Schedule::Single, None, 1, LoopId::One, 6.0)
        .run(Schedule::Static, Some(2), 6, LoopId::One, 1.5)
        .run(Schedule::Guided, Some(8), 6, LoopId::One, 1.5)
        .run(Schedule::Guided, Some(4), 6, LoopId::One, 1.5)
        .run(Schedule::Dynamic, Some(4), 6, LoopId::One, 2.0)
        .build()
}

/// Parallel runs of loop 1 without a `single` reference.
pub fn without_reference() -> Vec<Measurement> {
    MeasurementSetBuilder::new()
        .trials(&[0.9, 1.1])
        .run(Schedule::Auto, None, 6, LoopId::One, 3.0)
        .run(Schedule::Static, None, 6, LoopId::One, 2.0)
        .run(Schedule::Dynamic, Some(4), 6, LoopId::One, 1.0)
        .build()
}
