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

//! Raw benchmark measurements.

use crate::error::{AnalysisError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Work-distribution strategy under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Schedule {
    /// Static chunks assigned round-robin.
    Static,
    /// Chunks handed out on demand.
    Dynamic,
    /// Chunks shrinking with the remaining work.
    Guided,
    /// Implementation-chosen schedule.
    Auto,
    /// Serial reference run.
    Single,
    /// Affinity scheduling with work stealing.
    Affinity,
}

impl Schedule {
    /// All schedules, in declaration order.
    pub const ALL: [Schedule; 6] = [
        Schedule::Static,
        Schedule::Dynamic,
        Schedule::Guided,
        Schedule::Auto,
        Schedule::Single,
        Schedule::Affinity,
    ];

    /// Returns the lowercase label used in result files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Schedule::Static => "static",
            Schedule::Dynamic => "dynamic",
            Schedule::Guided => "guided",
            Schedule::Auto => "auto",
            Schedule::Single => "single",
            Schedule::Affinity => "affinity",
        }
    }

    /// Whether measurements of this schedule may carry a chunk size.
    ///
    /// `static` may appear both with and without one.
    pub fn accepts_chunksize(&self) -> bool {
        matches!(
            self,
            Schedule::Static | Schedule::Dynamic | Schedule::Guided
        )
    }
}

// Ordered by label, not by declaration order.
impl Ord for Schedule {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Schedule {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Schedule {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        Schedule::ALL
            .into_iter()
            .find(|schedule| schedule.as_str() == s)
            .ok_or_else(|| AnalysisError::invalid_measurement(format!("unknown schedule '{}'", s)))
    }
}

/// Which of the two benchmarked workloads a measurement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub enum LoopId {
    /// Loop 1.
    One,
    /// Loop 2.
    Two,
}

impl LoopId {
    /// Both loops, in order.
    pub const ALL: [LoopId; 2] = [LoopId::One, LoopId::Two];

    /// Returns the loop number as written in result files.
    pub fn number(&self) -> u8 {
        match self {
            LoopId::One => 1,
            LoopId::Two => 2,
        }
    }
}

impl fmt::Display for LoopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl TryFrom<u8> for LoopId {
    type Error = AnalysisError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(LoopId::One),
            2 => Ok(LoopId::Two),
            other => Err(AnalysisError::invalid_measurement(format!(
                "loop must be 1 or 2, got {}",
                other
            ))),
        }
    }
}

impl From<LoopId> for u8 {
    fn from(loop_id: LoopId) -> Self {
        loop_id.number()
    }
}

/// One benchmark trial as read from a results file.
///
/// Measurements are validated on construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    /// Schedule under test.
    pub schedule: Schedule,
    /// Chunk size, absent for schedules without one.
    pub chunksize: Option<u32>,
    /// Number of threads.
    pub num_threads: u32,
    /// Benchmarked loop.
    pub loop_id: LoopId,
    /// Elapsed time in seconds.
    pub time: f64,
}

impl Measurement {
    /// Creates a validated measurement.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidMeasurement`] if the chunk size or
    /// thread count is zero, the time is negative or not finite, or a chunk
    /// size is given for a schedule that has none.
    ///
    /// # Examples
    ///
    /// ```
    /// use loopsched_core::{LoopId, Measurement, Schedule};
    ///
    /// let m = Measurement::new(Schedule::Dynamic, Some(4), 6, LoopId::One, 0.25).unwrap();
    /// assert_eq!(m.chunksize, Some(4));
    ///
    /// assert!(Measurement::new(Schedule::Auto, Some(4), 6, LoopId::One, 0.25).is_err());
    /// ```
    pub fn new(
        schedule: Schedule,
        chunksize: Option<u32>,
        num_threads: u32,
        loop_id: LoopId,
        time: f64,
    ) -> Result<Self> {
        if num_threads == 0 {
            return Err(AnalysisError::invalid_measurement(
                "num_threads must be positive",
            ));
        }
        if !time.is_finite() || time < 0.0 {
            return Err(AnalysisError::invalid_measurement(format!(
                "time must be a non-negative number of seconds, got {}",
                time
            )));
        }
        match chunksize {
            Some(0) => {
                return Err(AnalysisError::invalid_measurement(
                    "chunksize must be positive",
                ))
            }
            Some(_) if !schedule.accepts_chunksize() => {
                return Err(AnalysisError::invalid_measurement(format!(
                    "schedule '{}' does not take a chunksize",
                    schedule
                )))
            }
            _ => {}
        }

        Ok(Self {
            schedule,
            chunksize,
            num_threads,
            loop_id,
            time,
        })
    }
}
