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

//! Builder for customizable measurement sets.

use loopsched_core::{ChunkExponent, LoopId, Measurement, Schedule};

/// Builder for measurement fixtures.
///
/// Every [`run`](Self::run) expands into one measurement per trial factor,
/// with `time = mean * factor`.
///
/// # Examples
///
/// ```
/// use loopsched_test::fixtures::builders::MeasurementSetBuilder;
/// use loopsched_core::{LoopId, Schedule};
///
/// let measurements = MeasurementSetBuilder::new()
///     .trials(&[0.5, 1.5])
///     .run(Schedule::Single, None, 1, LoopId::Two, 4.0)
///     .build();
///
/// assert_eq!(measurements.len(), 2);
/// assert_eq!(measurements[0].time, 2.0);
/// assert_eq!(measurements[1].time, 6.0);
/// ```
#[derive(Debug, Clone)]
pub struct MeasurementSetBuilder {
    trials: Vec<f64>,
    measurements: Vec<Measurement>,
}

impl Default for MeasurementSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MeasurementSetBuilder {
    /// Creates a builder with a single trial per run.
    pub fn new() -> Self {
        Self {
            trials: vec![1.0],
            measurements: Vec::new(),
        }
    }

    /// Sets the trial factors applied to subsequent runs.
    pub fn trials(mut self, factors: &[f64]) -> Self {
        self.trials = factors.to_vec();
        self
    }

    /// Adds one run of a configuration.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is not a valid measurement.
    pub fn run(
        mut self,
        schedule: Schedule,
        chunksize: Option<u32>,
        num_threads: u32,
        loop_id: LoopId,
        mean: f64,
    ) -> Self {
        for factor in &self.trials {
            let measurement =
                Measurement::new(schedule, chunksize, num_threads, loop_id, mean * factor)
                    .expect("fixture measurement must be valid");
            self.measurements.push(measurement);
        }
        self
    }

    /// Adds one run per supported chunk size (`2^0` to `2^6`), with the mean
    /// given by `mean_for`.
    pub fn chunk_sweep(
        mut self,
        schedule: Schedule,
        num_threads: u32,
        loop_id: LoopId,
        mean_for: impl Fn(ChunkExponent) -> f64,
    ) -> Self {
        for exponent in ChunkExponent::all() {
            self = self.run(
                schedule,
                Some(exponent.chunksize()),
                num_threads,
                loop_id,
                mean_for(exponent),
            );
        }
        self
    }

    /// Returns the measurements in insertion order.
    pub fn build(self) -> Vec<Measurement> {
        self.measurements
    }
}
