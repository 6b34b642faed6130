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

//! Grouping and per-group statistics.
//!
//! Measurements are partitioned by `(schedule, chunk exponent, threads, loop)`
//! and each partition is summarised by its mean, sample standard deviation and
//! count. The resulting [`AggregateTable`] is immutable and ordered, so every
//! consumer sees groups in the same sequence.

use crate::error::Result;
use crate::filter::GroupFilter;
use crate::model::{LoopId, Measurement, Schedule};
use crate::transform::{transform, ChunkExponent, TransformedMeasurement};
use std::collections::BTreeMap;
use tracing::debug;

/// Identity of an aggregate group.
///
/// Field order defines iteration order: schedule label, chunk exponent
/// (absent first), thread count, loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupKey {
    /// Schedule under test.
    pub schedule: Schedule,
    /// Rounded base-2 chunk size, if the run had one.
    pub chunk: Option<ChunkExponent>,
    /// Number of threads.
    pub num_threads: u32,
    /// Benchmarked loop.
    pub loop_id: LoopId,
}

impl GroupKey {
    /// Creates a group key.
    pub fn new(
        schedule: Schedule,
        chunk: Option<ChunkExponent>,
        num_threads: u32,
        loop_id: LoopId,
    ) -> Self {
        Self {
            schedule,
            chunk,
            num_threads,
            loop_id,
        }
    }

    /// Key of the group a transformed measurement belongs to.
    pub fn of(measurement: &TransformedMeasurement) -> Self {
        Self::new(
            measurement.schedule,
            measurement.chunk,
            measurement.num_threads,
            measurement.loop_id,
        )
    }

    /// Short human-readable description, e.g. `dynamic/chunk 2^3/6 threads/loop 1`.
    pub fn describe(&self) -> String {
        let chunk = match self.chunk {
            Some(exponent) => format!("chunk 2^{}", exponent),
            None => "no chunk".to_string(),
        };
        format!(
            "{}/{}/{} threads/loop {}",
            self.schedule, chunk, self.num_threads, self.loop_id
        )
    }
}

/// Summary statistics of one group.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupStats {
    /// Number of contributing measurements, at least 1.
    pub count: usize,
    /// Arithmetic mean of the times.
    pub mean: f64,
    /// Sample standard deviation (n - 1), `None` when `count == 1`.
    pub std_dev: Option<f64>,
}

impl GroupStats {
    /// Computes statistics over a non-empty slice of times.
    ///
    /// Returns `None` for an empty slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use loopsched_core::GroupStats;
    ///
    /// let stats = GroupStats::from_times(&[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(stats.count, 3);
    /// assert_eq!(stats.mean, 2.0);
    /// assert_eq!(stats.std_dev, Some(1.0));
    ///
    /// let single = GroupStats::from_times(&[0.5]).unwrap();
    /// assert_eq!(single.std_dev, None);
    /// ```
    pub fn from_times(times: &[f64]) -> Option<Self> {
        if times.is_empty() {
            return None;
        }

        let count = times.len();
        // Running mean: finite for any finite samples.
        let mean = times
            .iter()
            .enumerate()
            .fold(0.0, |mean, (i, t)| mean + (t - mean) / (i + 1) as f64);

        let std_dev = if count > 1 {
            // Deviations are scaled by the largest one before squaring.
            let scale = times.iter().map(|t| (t - mean).abs()).fold(0.0, f64::max);
            if scale == 0.0 {
                Some(0.0)
            } else {
                let sum_sq: f64 = times
                    .iter()
                    .map(|t| {
                        let diff = (t - mean) / scale;
                        diff * diff
                    })
                    .sum();
                Some(scale * (sum_sq / (count - 1) as f64).sqrt())
            }
        } else {
            None
        };

        Some(Self {
            count,
            mean,
            std_dev,
        })
    }
}

/// Immutable mapping from group key to statistics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateTable {
    groups: BTreeMap<GroupKey, GroupStats>,
}

impl AggregateTable {
    /// Transforms and aggregates raw measurements.
    ///
    /// # Errors
    ///
    /// Fails if any chunk size falls outside the supported exponent range.
    pub fn from_measurements(measurements: &[Measurement]) -> Result<Self> {
        let transformed = transform(measurements)?;
        Ok(aggregate(&transformed))
    }

    /// Looks up one group.
    pub fn get(&self, key: &GroupKey) -> Option<&GroupStats> {
        self.groups.get(key)
    }

    /// Iterates over all groups in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &GroupStats)> {
        self.groups.iter()
    }

    /// Iterates over the groups accepted by `filter`, in key order.
    pub fn matching<'a>(
        &'a self,
        filter: &'a GroupFilter,
    ) -> impl Iterator<Item = (&'a GroupKey, &'a GroupStats)> + 'a {
        self.groups.iter().filter(move |(key, _)| filter.matches(key))
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the table has no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Sum of all group counts; equals the number of aggregated measurements.
    pub fn total_count(&self) -> usize {
        self.groups.values().map(|stats| stats.count).sum()
    }
}

impl<'a> IntoIterator for &'a AggregateTable {
    type Item = (&'a GroupKey, &'a GroupStats);
    type IntoIter = std::collections::btree_map::Iter<'a, GroupKey, GroupStats>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Groups transformed measurements and computes per-group statistics.
///
/// An empty input yields an empty table.
pub fn aggregate(measurements: &[TransformedMeasurement]) -> AggregateTable {
    let mut times: BTreeMap<GroupKey, Vec<f64>> = BTreeMap::new();
    for measurement in measurements {
        times
            .entry(GroupKey::of(measurement))
            .or_default()
            .push(measurement.time);
    }

    let groups: BTreeMap<GroupKey, GroupStats> = times
        .into_iter()
        .filter_map(|(key, samples)| GroupStats::from_times(&samples).map(|stats| (key, stats)))
        .collect();

    debug!(
        measurements = measurements.len(),
        groups = groups.len(),
        "aggregated measurements"
    );

    AggregateTable { groups }
}
