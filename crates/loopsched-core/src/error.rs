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

//! Error types for aggregation, selection and chart building.

use crate::model::{LoopId, Schedule};
use thiserror::Error;

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors raised while validating, aggregating or selecting measurements.
///
/// Every variant is fatal for the operation that produced it. Missing data is
/// never turned into a NaN or a sentinel value that could travel silently into
/// later computations.
///
/// # Examples
///
/// ```
/// use loopsched_core::{AnalysisError, LoopId};
///
/// let err = AnalysisError::MissingReference {
///     what: "single schedule reference".to_string(),
///     loop_id: LoopId::One,
/// };
/// assert_eq!(
///     err.to_string(),
///     "Missing reference data for loop 1: single schedule reference"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// A measurement failed validation.
    #[error("Invalid measurement: {0}")]
    InvalidMeasurement(String),

    /// A chunk size rounds to a base-2 exponent outside the supported range.
    #[error("Chunk size {chunksize} maps to exponent {exponent}, outside 0..={max}")]
    ChunkOutOfRange {
        /// Raw chunk size.
        chunksize: u32,
        /// Rounded base-2 exponent.
        exponent: u32,
        /// Largest supported exponent.
        max: u8,
    },

    /// No aggregate group matched a selection.
    #[error("No measurements for loop {loop_id} on {threads} threads")]
    NoMatchingGroups {
        /// Thread count that was requested.
        threads: u32,
        /// Loop that was requested.
        loop_id: LoopId,
    },

    /// A required reference group or baseline scalar is absent.
    #[error("Missing reference data for loop {loop_id}: {what}")]
    MissingReference {
        /// Description of the missing group.
        what: String,
        /// Loop the reference was requested for.
        loop_id: LoopId,
    },

    /// More than one group qualifies where exactly one is required.
    #[error("Ambiguous reference data for loop {loop_id}: {what} matches {count} groups")]
    AmbiguousReference {
        /// Description of the requested group.
        what: String,
        /// Loop the reference was requested for.
        loop_id: LoopId,
        /// Number of matching groups.
        count: usize,
    },

    /// A speedup was requested against a zero mean time.
    #[error("Cannot compute speedup for {context}: mean time is zero")]
    ZeroTime {
        /// Description of the group with zero mean time.
        context: String,
    },

    /// A speedup overflowed to a non-finite value.
    #[error("Speedup for {context} is not finite: {value}")]
    NonFiniteSpeedup {
        /// Description of the group the speedup was computed for.
        context: String,
        /// The offending value.
        value: f64,
    },

    /// A chart family was requested for a schedule it does not support.
    #[error("Schedule '{schedule}' is not supported by the {family} chart")]
    UnsupportedSchedule {
        /// Offending schedule.
        schedule: Schedule,
        /// Chart family name.
        family: &'static str,
    },

    /// Invalid analysis configuration.
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name.
        parameter: String,
        /// Reason for invalidity.
        reason: String,
    },
}

impl AnalysisError {
    /// Create an invalid measurement error.
    pub fn invalid_measurement(msg: impl Into<String>) -> Self {
        Self::InvalidMeasurement(msg.into())
    }

    /// Create a missing reference error.
    pub fn missing_reference(what: impl Into<String>, loop_id: LoopId) -> Self {
        Self::MissingReference {
            what: what.into(),
            loop_id,
        }
    }
}
