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

//! Best-configuration selection and speedup normalization.

use crate::aggregate::{AggregateTable, GroupKey, GroupStats};
use crate::error::{AnalysisError, Result};
use crate::filter::{ChunkFilter, GroupFilter};
use crate::model::{LoopId, Schedule};
use std::cmp::Ordering;
use tracing::{debug, warn};

/// The fastest group for a thread count and loop.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestConfiguration {
    /// Winning group.
    pub key: GroupKey,
    /// Its statistics.
    pub stats: GroupStats,
}

impl BestConfiguration {
    /// Filter selecting the same schedule and chunk across every thread count.
    pub fn across_threads(&self) -> GroupFilter {
        GroupFilter::new()
            .schedule(self.key.schedule)
            .chunk(ChunkFilter::same_as(self.key.chunk))
            .loop_id(self.key.loop_id)
    }

    /// Legend label, e.g. `dynamic, 8`.
    pub fn label(&self) -> String {
        match self.key.chunk {
            Some(exponent) => format!("{}, {}", self.key.schedule, exponent.chunksize()),
            None => self.key.schedule.to_string(),
        }
    }
}

/// Serial baseline for a loop.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reference {
    /// The `single` group used as baseline.
    pub key: GroupKey,
    /// Mean time of that group.
    pub mean: f64,
}

impl Reference {
    /// Speedup of `stats` relative to this reference.
    pub fn speedup_of(&self, key: &GroupKey, stats: &GroupStats) -> Result<f64> {
        speedup(self.mean, stats.mean).map_err(|err| match err {
            AnalysisError::NonFiniteSpeedup { value, .. } => AnalysisError::NonFiniteSpeedup {
                context: key.describe(),
                value,
            },
            _ => AnalysisError::ZeroTime {
                context: key.describe(),
            },
        })
    }
}

// Equal means fall back to schedule label, then chunk exponent (absent first).
fn tie_break(a: (&GroupKey, &GroupStats), b: (&GroupKey, &GroupStats)) -> Ordering {
    a.1.mean
        .total_cmp(&b.1.mean)
        .then_with(|| a.0.schedule.cmp(&b.0.schedule))
        .then_with(|| a.0.chunk.cmp(&b.0.chunk))
}

/// Finds the group with the minimum mean time at `threads` for `loop_id`,
/// across every schedule and chunk size.
///
/// Ties on the exact minimum are broken by schedule label, then by chunk
/// exponent with an absent chunk first.
///
/// # Errors
///
/// Returns [`AnalysisError::NoMatchingGroups`] if no group has that thread
/// count and loop.
///
/// # Examples
///
/// ```
/// use loopsched_core::{best_configuration, AggregateTable, LoopId, Measurement, Schedule};
///
/// let measurements = vec![
///     Measurement::new(Schedule::Static, Some(1), 6, LoopId::One, 5.0).unwrap(),
///     Measurement::new(Schedule::Dynamic, Some(1), 6, LoopId::One, 4.0).unwrap(),
///     Measurement::new(Schedule::Guided, Some(1), 6, LoopId::One, 6.0).unwrap(),
/// ];
/// let table = AggregateTable::from_measurements(&measurements).unwrap();
///
/// let best = best_configuration(&table, 6, LoopId::One).unwrap();
/// assert_eq!(best.key.schedule, Schedule::Dynamic);
/// assert_eq!(best.stats.mean, 4.0);
/// ```
pub fn best_configuration(
    table: &AggregateTable,
    threads: u32,
    loop_id: LoopId,
) -> Result<BestConfiguration> {
    let filter = GroupFilter::new().threads(threads).loop_id(loop_id);

    let (key, stats) = table
        .matching(&filter)
        .min_by(|a, b| tie_break(*a, *b))
        .ok_or(AnalysisError::NoMatchingGroups { threads, loop_id })?;

    debug!(group = %key.describe(), mean = stats.mean, "selected best configuration");

    Ok(BestConfiguration {
        key: *key,
        stats: *stats,
    })
}

/// Looks up the `single` schedule baseline for `loop_id`.
///
/// Serial runs have no thread dimension, so the thread count is ignored.
/// If several `single` groups exist for the loop, the one at one thread is
/// used; without one the reference is ambiguous.
///
/// # Errors
///
/// - [`AnalysisError::MissingReference`] if the loop has no `single` group.
/// - [`AnalysisError::AmbiguousReference`] if several exist and none is at
///   one thread.
pub fn reference_time(table: &AggregateTable, loop_id: LoopId) -> Result<Reference> {
    let filter = GroupFilter::new()
        .schedule(Schedule::Single)
        .loop_id(loop_id);
    let candidates: Vec<(&GroupKey, &GroupStats)> = table.matching(&filter).collect();

    let (key, stats) = match candidates.as_slice() {
        [] => {
            return Err(AnalysisError::missing_reference(
                "no single schedule measurements",
                loop_id,
            ))
        }
        [only] => *only,
        several => {
            let serial = several
                .iter()
                .find(|(key, _)| key.num_threads == 1)
                .ok_or_else(|| AnalysisError::AmbiguousReference {
                    what: "single schedule".to_string(),
                    loop_id,
                    count: several.len(),
                })?;
            warn!(
                loop_id = loop_id.number(),
                groups = several.len(),
                "several single schedule groups, using the one-thread group"
            );
            *serial
        }
    };

    Ok(Reference {
        key: *key,
        mean: stats.mean,
    })
}

/// `reference_mean / group_mean`.
///
/// # Errors
///
/// - [`AnalysisError::ZeroTime`] when `group_mean` is zero.
/// - [`AnalysisError::NonFiniteSpeedup`] when the ratio overflows, e.g. for a
///   subnormal `group_mean`.
///
/// # Examples
///
/// ```
/// use loopsched_core::speedup;
///
/// assert_eq!(speedup(10.0, 2.5).unwrap(), 4.0);
/// assert!(speedup(10.0, 0.0).is_err());
/// assert!(speedup(10.0, 1e-310).is_err());
/// ```
pub fn speedup(reference_mean: f64, group_mean: f64) -> Result<f64> {
    if group_mean == 0.0 {
        return Err(AnalysisError::ZeroTime {
            context: format!("reference mean {}", reference_mean),
        });
    }
    let ratio = reference_mean / group_mean;
    if !ratio.is_finite() {
        return Err(AnalysisError::NonFiniteSpeedup {
            context: format!("reference mean {} over {}", reference_mean, group_mean),
            value: ratio,
        });
    }
    Ok(ratio)
}
