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

//! Chunk size transform.
//!
//! Chunk sizes are plotted and grouped by their base-2 logarithm rounded to
//! the nearest integer. The transform is a pure function from raw
//! [`Measurement`]s to [`TransformedMeasurement`]s; the loaded data is never
//! rewritten.

use crate::error::{AnalysisError, Result};
use crate::model::{LoopId, Measurement, Schedule};
use std::fmt;

/// Largest chunk exponent the analysis supports (chunk size 64).
pub const MAX_CHUNK_EXPONENT: u8 = 6;

/// Rounded base-2 logarithm of a chunk size, always in `0..=MAX_CHUNK_EXPONENT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct ChunkExponent(u8);

impl ChunkExponent {
    /// Creates an exponent, rejecting values above [`MAX_CHUNK_EXPONENT`].
    pub fn new(exponent: u8) -> Result<Self> {
        if exponent > MAX_CHUNK_EXPONENT {
            return Err(AnalysisError::ChunkOutOfRange {
                chunksize: 1u32 << exponent.min(31),
                exponent: u32::from(exponent),
                max: MAX_CHUNK_EXPONENT,
            });
        }
        Ok(Self(exponent))
    }

    /// Computes `round(log2(chunksize))`.
    ///
    /// Powers of two are resolved with integer arithmetic, so `2^k` always
    /// yields exactly `k`. Other sizes go through `f64::log2` and are rounded
    /// half away from zero before any comparison.
    ///
    /// # Examples
    ///
    /// ```
    /// use loopsched_core::ChunkExponent;
    ///
    /// assert_eq!(ChunkExponent::from_chunksize(32).unwrap().value(), 5);
    /// assert_eq!(ChunkExponent::from_chunksize(3).unwrap().value(), 2);
    /// assert!(ChunkExponent::from_chunksize(0).is_err());
    /// assert!(ChunkExponent::from_chunksize(1024).is_err());
    /// ```
    pub fn from_chunksize(chunksize: u32) -> Result<Self> {
        if chunksize == 0 {
            return Err(AnalysisError::invalid_measurement(
                "chunksize must be positive",
            ));
        }

        let exponent = if chunksize.is_power_of_two() {
            chunksize.trailing_zeros()
        } else {
            // log2 of a u32 lies in [0, 32), so the cast cannot truncate.
            f64::from(chunksize).log2().round() as u32
        };

        if exponent > u32::from(MAX_CHUNK_EXPONENT) {
            return Err(AnalysisError::ChunkOutOfRange {
                chunksize,
                exponent,
                max: MAX_CHUNK_EXPONENT,
            });
        }
        Ok(Self(exponent as u8))
    }

    /// All supported exponents, ascending.
    pub fn all() -> impl Iterator<Item = ChunkExponent> {
        (0..=MAX_CHUNK_EXPONENT).map(ChunkExponent)
    }

    /// Returns the exponent.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the chunk size this exponent stands for (`2^k`).
    pub fn chunksize(&self) -> u32 {
        1u32 << self.0
    }
}

impl fmt::Display for ChunkExponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for ChunkExponent {
    type Error = AnalysisError;

    fn try_from(value: u8) -> Result<Self> {
        ChunkExponent::new(value)
    }
}

impl From<ChunkExponent> for u8 {
    fn from(exponent: ChunkExponent) -> Self {
        exponent.0
    }
}

/// A measurement whose chunk size has been replaced by its exponent.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformedMeasurement {
    /// Schedule under test.
    pub schedule: Schedule,
    /// Rounded base-2 chunk size, absent for schedules without one.
    pub chunk: Option<ChunkExponent>,
    /// Number of threads.
    pub num_threads: u32,
    /// Benchmarked loop.
    pub loop_id: LoopId,
    /// Elapsed time in seconds.
    pub time: f64,
}

impl TransformedMeasurement {
    /// Transforms a single measurement.
    pub fn from_measurement(measurement: &Measurement) -> Result<Self> {
        let chunk = measurement
            .chunksize
            .map(ChunkExponent::from_chunksize)
            .transpose()?;

        Ok(Self {
            schedule: measurement.schedule,
            chunk,
            num_threads: measurement.num_threads,
            loop_id: measurement.loop_id,
            time: measurement.time,
        })
    }
}

/// Transforms every measurement, failing on the first out-of-range chunk size.
pub fn transform(measurements: &[Measurement]) -> Result<Vec<TransformedMeasurement>> {
    measurements
        .iter()
        .map(TransformedMeasurement::from_measurement)
        .collect()
}
